use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, InputEvent};
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub value: String,
    #[prop_or_default]
    pub placeholder: &'static str,
    /// Emitted with the new value on every keystroke.
    pub oninput: Callback<String>,
}

/// A controlled text input. The displayed value always follows the `value` property.
#[derive(Debug)]
pub struct Input;

impl Component for Input {
    type Message = String;
    type Properties = Props;

    #[inline]
    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    #[inline]
    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        ctx.props().oninput.emit(msg);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let value = ctx.props().value.clone();
        let placeholder = ctx.props().placeholder;

        let oninput = ctx.link().batch_callback(|event: InputEvent| {
            event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
        });

        html! {
            <input class="cf-input" type="text" {value} {placeholder} {oninput} />
        }
    }
}
