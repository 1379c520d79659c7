use crate::game::CelebrationPlan;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub plan: Rc<CelebrationPlan>,
    #[prop_or_default]
    pub fading: bool,
}

/// Falling confetti for one win; removed by unmounting.
#[function_component(ConfettiLayer)]
pub fn confetti_layer(p: &Props) -> Html {
    let class = classes!("confetti-container", p.fading.then_some("confetti-fade"));
    html! {
        <div {class} aria-hidden="true">
            { for p.plan.confetti.iter().map(|piece| html! {
                <div class="confetti-piece" style={piece.style()}></div>
            }) }
        </div>
    }
}
