use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub min: i32,
    pub max: i32,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub evaluating: bool,
    pub on_input: Callback<String>,
    pub on_check: Callback<()>,
}

#[function_component(GuessForm)]
pub fn guess_form(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let onkeydown = {
        let cb = p.on_check.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let onclick = {
        let cb = p.on_check.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let spinner_class = classes!("spinner", p.evaluating.then_some("spinning"));

    html! {
        <div class="guess-row">
            <label for="guessInput" class="sr-only">{ "Your guess" }</label>
            <input
                id="guessInput"
                type="number"
                inputmode="numeric"
                min={p.min.to_string()}
                max={p.max.to_string()}
                placeholder={format!("{}–{}", p.min, p.max)}
                value={p.value.clone()}
                disabled={p.disabled}
                {oninput}
                {onkeydown}
            />
            <button id="guessBtn" type="button" disabled={p.disabled} {onclick}>{ "Check" }</button>
            <span id="spinner" class={spinner_class} aria-hidden="true"></span>
        </div>
    }
}
