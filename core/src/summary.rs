use std::rc::Rc;

use crate::*;

const ACTIVE: &str = "active";
const SUCCESS: &str = "success";
const FAIL: &str = "fail";
const HIDE: &str = "hide";

const LABEL_SUCCESS: &str = "#@label_success";
const LABEL_FAIL: &str = "#@label_fail";
const LABEL_SHARE: &str = "#@share";
const LABEL_REVEAL: &str = "#@summary_see";
const LABEL_FEEDBACK: &str = "#@tweet_feedback ";

/// Collaborators the summary view consults after construction.
pub struct Services {
    pub text: Rc<dyn TextResolver>,
    pub feedback: Box<dyn FeedbackText>,
    pub share: Rc<dyn Share>,
}

impl Services {
    /// Catalog-backed text and feedback.
    pub fn localized(catalog: Catalog, share: impl Share + 'static) -> Self {
        let text: Rc<dyn TextResolver> = Rc::new(catalog);
        Self {
            feedback: Box::new(LocalizedFeedback::new(text.clone())),
            text,
            share: Rc::new(share),
        }
    }
}

/// End-of-round screen, built once and refreshed for every round.
///
/// The subtree and its click listeners are created in [`SummaryView::new`] and
/// only mutated in place afterwards. Starts hidden.
pub struct SummaryView<D: Dom> {
    dom: D,
    text: Rc<dyn TextResolver>,
    feedback: Box<dyn FeedbackText>,
    root: D::Node,
    title: D::Node,
    details: D::Node,
    reveal: D::Node,
    action_buttons: Vec<(ActionId, D::Node)>,
    share_button: D::Node,
    _listeners: Vec<D::Listener>,
}

impl<D: Dom> SummaryView<D> {
    /// Builds the view and wires one click listener per control.
    ///
    /// `on_action` receives the id of the clicked action button, synchronously
    /// from the click handler. The share button goes to [`Services::share`].
    pub fn new(
        dom: D,
        config: &SummaryConfig,
        services: Services,
        on_action: impl Fn(ActionId) + 'static,
    ) -> Self {
        let Services {
            text,
            feedback,
            share,
        } = services;

        let action_buttons: Vec<(ActionId, D::Node)> = config
            .actions
            .iter()
            .map(|action| {
                let label = dom.create("span", Attrs::None, text.resolve(&action.label).into());
                let button = dom.create(
                    "button",
                    "summary-action-button".into(),
                    vec![dom.icon(&action.icon), label].into(),
                );
                (action.id, button)
            })
            .collect();

        let share_label = dom.create("p", Attrs::None, text.resolve(LABEL_SHARE).into());
        let share_button = dom.create(
            "button",
            "summary-action-button".into(),
            vec![share_label].into(),
        );

        let feedback_block = Self::feedback_block(&dom, &*text, &config.social);

        let title = dom.create("h1", "summary-title highlight".into(), Content::Empty);
        let details = dom.create("p", "summary-details".into(), Content::Empty);
        let reveal = dom.create("p", "summary-reveal".into(), text.resolve(LABEL_REVEAL).into());
        let actions = dom.create(
            "div",
            "summary-actions bloc".into(),
            action_buttons
                .iter()
                .map(|(_, button)| button.clone())
                .collect::<Vec<_>>()
                .into(),
        );
        let social = dom.create(
            "div",
            "summary-share bloc".into(),
            vec![share_button.clone()].into(),
        );

        let root = dom.create(
            "div",
            "summary view".into(),
            vec![
                dom.create(
                    "div",
                    "view-bloc".into(),
                    vec![title.clone(), details.clone(), reveal.clone()].into(),
                ),
                dom.create(
                    "div",
                    "view-bloc".into(),
                    vec![actions, social, feedback_block].into(),
                ),
            ]
            .into(),
        );

        let on_action: Rc<dyn Fn(ActionId)> = Rc::new(on_action);
        let mut listeners = Vec::with_capacity(action_buttons.len() + 1);
        for (id, button) in &action_buttons {
            let id = *id;
            let on_action = on_action.clone();
            listeners.push(dom.on_click(
                button,
                Box::new(move || {
                    log::trace!("summary action: {}", id);
                    on_action(id);
                }),
            ));
        }

        let message = config.social.message.clone();
        let url = config.url.clone();
        listeners.push(dom.on_click(
            &share_button,
            Box::new(move || {
                log::trace!("summary share: {}", url);
                share.share(&message, &url);
            }),
        ));

        log::debug!(
            "summary view built with {} action buttons",
            action_buttons.len()
        );

        Self {
            dom,
            text,
            feedback,
            root,
            title,
            details,
            reveal,
            action_buttons,
            share_button,
            _listeners: listeners,
        }
    }

    fn feedback_block(dom: &D, text: &dyn TextResolver, social: &SocialConfig) -> D::Node {
        let href = social
            .platform
            .share_url("", &social.handle, &social.hashtags);
        let link = dom.create(
            "a",
            Attrs::Map(&[("href", href.as_str())]),
            social.handle.clone().into(),
        );
        let intro = dom.create("span", Attrs::None, text.resolve(LABEL_FEEDBACK).into());
        dom.create(
            "div",
            "summary-feedback bloc".into(),
            vec![dom.create("p", Attrs::None, vec![intro, link].into())].into(),
        )
    }

    /// Shows the outcome of a round and makes the view visible.
    pub fn set_content(&self, is_success: bool, attempts: u32) {
        log::debug!(
            "summary content: success={} attempts={}",
            is_success,
            attempts
        );

        self.dom.set_class(&self.title, FAIL, !is_success);
        self.dom.set_class(&self.title, SUCCESS, is_success);

        let label = if is_success { LABEL_SUCCESS } else { LABEL_FAIL };
        self.dom.set_text(&self.title, &self.text.resolve(label));

        let details = self.feedback.feedback(is_success, attempts);
        self.dom.set_text(&self.details, &details);

        self.dom.set_class(&self.reveal, HIDE, is_success);

        self.toggle(Some(true));
    }

    /// Sets visibility to `force`, or flips it when `None`.
    pub fn toggle(&self, force: Option<bool>) {
        let shown = force.unwrap_or_else(|| !self.is_shown());
        log::trace!("summary shown: {}", shown);
        self.dom.set_class(&self.root, ACTIVE, shown);
    }

    pub fn show(&self) {
        self.toggle(Some(true));
    }

    pub fn hide(&self) {
        self.toggle(Some(false));
    }

    pub fn is_shown(&self) -> bool {
        self.dom.has_class(&self.root, ACTIVE)
    }

    /// Node to mount into the host's view.
    pub fn root(&self) -> &D::Node {
        &self.root
    }

    /// Action buttons in configuration order.
    pub fn action_buttons(&self) -> impl Iterator<Item = (ActionId, &D::Node)> {
        self.action_buttons.iter().map(|(id, button)| (*id, button))
    }

    pub fn share_button(&self) -> &D::Node {
        &self.share_button
    }
}
