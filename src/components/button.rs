use yew::prelude::*;

/// An interactive button emitting `onclick` when clicked.
///
/// Keyboard activation (Enter or Space while focused) is handled by the browser, which fires a
/// regular click.
pub struct Button;

impl Component for Button {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, _msg: Self::Message) -> bool {
        ctx.props().onclick.emit(());

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = ctx.props().title;
        let classes = ctx.props().classes;

        let onclick = ctx.link().callback(|_: MouseEvent| ());

        html! {
            <button role="button" class={classes} {title} {onclick}>
                { for ctx.props().children.iter() }
            </button>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
    pub onclick: Callback<()>,
    pub title: &'static str,
    #[prop_or("button")]
    pub classes: &'static str,
}
