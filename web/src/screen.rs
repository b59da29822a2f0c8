use breaklock_core::{ActionId, Catalog, Services, SummaryConfig, SummaryView};
use yew::prelude::*;

use crate::dom::WebDom;
use crate::share::WindowShare;

/// Result of one finished round.
///
/// `round` tells apart consecutive rounds that ended the same way; the host
/// bumps it for every round so the screen refreshes and shows again.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outcome {
    pub round: u32,
    pub is_success: bool,
    pub attempts: u32,
}

impl Outcome {
    pub const fn new(round: u32, is_success: bool, attempts: u32) -> Self {
        Self {
            round,
            is_success,
            attempts,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SummaryScreenProps {
    pub config: SummaryConfig,
    pub lang: AttrValue,
    /// Last finished round, `None` until one ends.
    #[prop_or_default]
    pub outcome: Option<Outcome>,
    /// Receives every action after the screen hid itself.
    #[prop_or_default]
    pub on_action: Callback<ActionId>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Msg {
    Action(ActionId),
    Toggle,
}

/// Hosts a single [`SummaryView`] for the whole session.
pub struct SummaryScreen {
    view: SummaryView<WebDom>,
}

impl SummaryScreen {
    fn apply(&self, outcome: Option<Outcome>) {
        if let Some(Outcome {
            round,
            is_success,
            attempts,
        }) = outcome
        {
            log::debug!("summary for round {}", round);
            self.view.set_content(is_success, attempts);
        }
    }
}

impl Component for SummaryScreen {
    type Message = Msg;
    type Properties = SummaryScreenProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let services = Services::localized(
            Catalog::for_lang(&props.lang),
            WindowShare::new(&props.config.social),
        );
        let on_action = ctx.link().callback(Msg::Action);
        let view = SummaryView::new(WebDom::new(), &props.config, services, move |id| {
            on_action.emit(id)
        });

        let screen = Self { view };
        screen.apply(props.outcome);
        screen
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Action(id) => {
                let props = ctx.props();
                let name = props
                    .config
                    .action(id)
                    .map_or("unknown", |action| action.name.as_str());
                log::info!("summary action: {} ({})", name, id);
                self.view.hide();
                props.on_action.emit(id);
            }
            Toggle => self.view.toggle(None),
        }

        false
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.config != old_props.config || props.lang != old_props.lang {
            log::debug!("summary config changed after construction, keeping the built view");
        }
        if props.outcome != old_props.outcome {
            self.apply(props.outcome);
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_toggle = ctx.link().callback(|_: MouseEvent| Msg::Toggle);
        let root: web_sys::Node = self.view.root().clone().into();

        html! {
            <div class="breaklock">
                <small onclick={on_toggle}>{"···"}</small>
                { Html::VRef(root) }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(outcome: Option<Outcome>) -> SummaryScreenProps {
        SummaryScreenProps {
            config: SummaryConfig::default(),
            lang: "en".into(),
            outcome,
            on_action: Default::default(),
        }
    }

    #[test]
    fn repeated_result_in_a_new_round_changes_props() {
        let first = props(Some(Outcome::new(1, false, 3)));
        let second = props(Some(Outcome::new(2, false, 3)));
        assert!(first != second);
        assert_ne!(first.outcome, second.outcome);
    }

    #[test]
    fn same_round_keeps_props_equal() {
        let first = props(Some(Outcome::new(4, true, 2)));
        let again = props(Some(Outcome::new(4, true, 2)));
        assert!(first == again);
    }
}
