use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
    #[prop_or(false)]
    pub reverse: bool,
}

/// Endless ribbon of words. The list is rendered twice so the CSS animation
/// can loop by translating exactly one copy's width.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track = |hidden: bool| {
        html! {
            <div class="marquee-track" aria-hidden={hidden.to_string()}>
                { for props.items.iter().map(|item| html! {
                    <span class="marquee-item">{*item}<span class="marquee-dot">{"•"}</span></span>
                }) }
            </div>
        }
    };

    html! {
        <div class={classes!("marquee", props.reverse.then(|| "marquee--reverse"))}>
            <div class="marquee-inner">
                {track(false)}
                {track(true)}
            </div>
        </div>
    }
}
