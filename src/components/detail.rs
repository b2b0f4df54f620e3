use clubfinder_api::clubs::Club;
use yew::{html, Component, Context, Html, Properties};

use crate::consts::{CARD_IMAGE, CATEGORY_ICON, HUMAN_ICON};
use crate::utils::capitalize;

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
pub struct Props {
    pub club: Club,
}

/// A card showing all details of a single [`Club`].
#[derive(Debug)]
pub struct Detail;

impl Component for Detail {
    type Message = ();
    type Properties = Props;

    #[inline]
    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let club = &ctx.props().club;

        let extra: Html = extra_details(club).iter().map(render_extra).collect();

        html! {
            <div class="cf-detail">
                <img class="detail-image" src={CARD_IMAGE} loading="lazy" alt="" />
                <div class="cf-detail-body">
                    <h2 class="cf-detail-name">{ capitalize(&club.club_name) }</h2>
                    <p class="cf-detail-description">{ club.description.clone() }</p>
                    { extra }
                </div>
            </div>
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Human,
    Category,
}

impl Icon {
    pub fn src(&self) -> &'static str {
        match self {
            Self::Human => HUMAN_ICON,
            Self::Category => CATEGORY_ICON,
        }
    }

    pub fn alt(&self) -> &'static str {
        match self {
            Self::Human => "members",
            Self::Category => "category",
        }
    }
}

/// An icon badge with a label below the club description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtraDetail {
    pub icon: Icon,
    pub name: String,
}

/// Returns the badges of `club`: the member count first, the category second. Missing values
/// produce an empty label.
pub fn extra_details(club: &Club) -> [ExtraDetail; 2] {
    let members = club
        .member_count
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    [
        ExtraDetail {
            icon: Icon::Human,
            name: members,
        },
        ExtraDetail {
            icon: Icon::Category,
            name: club.category.clone(),
        },
    ]
}

#[inline]
fn render_extra(detail: &ExtraDetail) -> Html {
    html! {
        <div class="cf-detail-extra">
            <span class="cf-detail-icon">
                <img src={detail.icon.src()} alt={detail.icon.alt()} />
            </span>
            <span class="cf-detail-label">{ capitalize(&detail.name) }</span>
        </div>
    }
}
