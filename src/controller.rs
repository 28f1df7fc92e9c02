// Sub-tab controller.
// Owns the active sub-tab, renders navigation controls, and delegates content to
// the active sub-tab.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, error, trace};

use crate::context::RenderContext;
use crate::dom::{ACTIVE_CLASS, CONTENT_CLASS, Container, Element, NAV_CLASS};
use crate::error::{Result, SubTabError};
use crate::plugin::PluginWithSettings;
use crate::registry::{SubTabId, SubTabRegistry};

struct Inner<S, Id: SubTabId, P, C: Container> {
    container: C,
    plugin: Rc<P>,
    registry: Rc<SubTabRegistry<S, Id, C>>,
    active: Cell<Id>,
}

/// Settings page made of several sub-tabs, one visible at a time.
///
/// The rendering skeleton is fixed: clear the container, build navigation, then
/// build the active sub-tab's content. Pages differ only in their registry and
/// default sub-tab.
pub struct SubTabController<S, Id, P, C = Element>
where
    Id: SubTabId,
    C: Container,
{
    inner: Rc<Inner<S, Id, P, C>>,
}

impl<S, Id, P, C> SubTabController<S, Id, P, C>
where
    S: 'static,
    Id: SubTabId,
    P: PluginWithSettings<S> + 'static,
    C: Container,
{
    /// Create a controller rendering into `container`. Does not render.
    ///
    /// Fails if `default_id` has no entry in `registry`.
    pub fn new(
        container: C,
        plugin: Rc<P>,
        registry: Rc<SubTabRegistry<S, Id, C>>,
        default_id: Id,
    ) -> Result<Self> {
        if !registry.contains(default_id) {
            return Err(SubTabError::DefaultNotRegistered(default_id.as_str()));
        }

        Ok(Self {
            inner: Rc::new(Inner {
                container,
                plugin,
                registry,
                active: Cell::new(default_id),
            }),
        })
    }

    pub fn active_id(&self) -> Id {
        self.inner.active.get()
    }

    pub fn registry(&self) -> &Rc<SubTabRegistry<S, Id, C>> {
        &self.inner.registry
    }

    pub fn plugin(&self) -> &Rc<P> {
        &self.inner.plugin
    }

    /// The top-level container this controller clears and refills.
    pub fn container(&self) -> &C {
        &self.inner.container
    }

    /// Rebuild the whole page: navigation region first, then content region.
    pub fn display(&self) -> Result<()> {
        debug!(active = self.active_id().as_str(), "displaying settings sub-tabs");

        let container = &self.inner.container;
        container.empty();

        let navigation = container.create_div(NAV_CLASS);
        let content = container.create_div(CONTENT_CLASS);

        self.render_navigation(&navigation);
        self.render_active_sub_tab(&content)
    }

    /// Render one control per registered sub-tab, in registry order.
    pub fn render_navigation(&self, container: &C) {
        let active = self.active_id();

        for (id, sub_tab) in self.inner.registry.iter() {
            let button = container.create_button(sub_tab.header());
            if id == active {
                button.add_class(ACTIVE_CLASS);
            }
            trace!(id = id.as_str(), active = (id == active), "rendered navigation control");

            // Weak so controls left behind by a dropped controller do nothing.
            let controller = Rc::downgrade(&self.inner);
            button.on_click(Box::new(move || {
                if let Some(inner) = controller.upgrade() {
                    SubTabController { inner }.select(id);
                }
            }));
        }
    }

    /// Render the active sub-tab into `container`. Does not clear it first.
    pub fn render_active_sub_tab(&self, container: &C) -> Result<()> {
        let active = self.active_id();
        let sub_tab = self
            .inner
            .registry
            .get(active)
            .ok_or(SubTabError::UnregisteredSubTab(active.as_str()))?;

        let plugin: Rc<dyn PluginWithSettings<S>> = self.inner.plugin.clone();
        let ctx = RenderContext::new(container, plugin);
        sub_tab.render(&ctx);
        Ok(())
    }

    /// Navigation click handler. Selecting the active sub-tab is a no-op.
    fn select(&self, id: Id) {
        let current = self.active_id();
        if current == id {
            return;
        }

        debug!(from = current.as_str(), to = id.as_str(), "switching settings sub-tab");
        self.inner.active.set(id);

        if let Err(err) = self.display() {
            error!(%err, "failed to re-render settings sub-tabs");
        }
    }

    #[cfg(test)]
    fn unchecked(
        container: C,
        plugin: Rc<P>,
        registry: Rc<SubTabRegistry<S, Id, C>>,
        active: Id,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                container,
                plugin,
                registry,
                active: Cell::new(active),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::FutureExt;

    use crate::plugin::SaveFuture;
    use crate::subtab::SubTab;

    crate::subtab_ids! {
        enum TestTab {
            General => "general",
            Structure => "structure",
        }
    }

    type Log = Rc<RefCell<Vec<String>>>;

    /// Container that records every call into a shared log.
    #[derive(Clone)]
    struct Recording {
        element: Element,
        log: Log,
    }

    impl Recording {
        fn root(log: &Log) -> Self {
            Self {
                element: Element::root(),
                log: Rc::clone(log),
            }
        }

        fn wrap(&self, element: Element) -> Self {
            Self {
                element,
                log: Rc::clone(&self.log),
            }
        }

        fn push(&self, entry: String) {
            self.log.borrow_mut().push(entry);
        }
    }

    impl Container for Recording {
        fn empty(&self) {
            self.push("empty".to_string());
            self.element.empty();
        }

        fn create_div(&self, cls: &str) -> Self {
            self.push(format!("div:{cls}"));
            self.wrap(self.element.create_div(cls))
        }

        fn create_button(&self, text: &str) -> Self {
            self.push(format!("button:{text}"));
            self.wrap(self.element.create_button(text))
        }

        fn set_text(&self, text: &str) {
            self.element.set_text(text);
        }

        fn add_class(&self, cls: &str) {
            self.element.add_class(cls);
        }

        fn remove_class(&self, cls: &str) {
            self.element.remove_class(cls);
        }

        fn on_click(&self, handler: Box<dyn Fn()>) {
            self.element.on_click(handler);
        }
    }

    #[derive(Debug, Default)]
    struct TestSettings {
        value: String,
    }

    struct TestPlugin {
        settings: Rc<RefCell<TestSettings>>,
        saves: Rc<Cell<usize>>,
    }

    impl TestPlugin {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                settings: Rc::new(RefCell::new(TestSettings {
                    value: "initial".to_string(),
                })),
                saves: Rc::new(Cell::new(0)),
            })
        }
    }

    impl PluginWithSettings<TestSettings> for TestPlugin {
        fn settings(&self) -> Rc<RefCell<TestSettings>> {
            Rc::clone(&self.settings)
        }

        fn save_settings(&self) -> SaveFuture {
            self.saves.set(self.saves.get() + 1);
            async { Ok(()) }.boxed_local()
        }
    }

    /// What a sub-tab saw during one render call.
    struct Seen {
        container: Element,
        plugin: *const (),
        settings: Rc<RefCell<TestSettings>>,
        save: SaveFuture,
    }

    type SeenLog = Rc<RefCell<Vec<Seen>>>;

    struct TestSubTab {
        header: &'static str,
        log: Log,
        seen: SeenLog,
    }

    impl TestSubTab {
        fn boxed(header: &'static str, log: &Log, seen: &SeenLog) -> Box<Self> {
            Box::new(Self {
                header,
                log: Rc::clone(log),
                seen: Rc::clone(seen),
            })
        }
    }

    impl SubTab<TestSettings, Recording> for TestSubTab {
        fn header(&self) -> &str {
            self.header
        }

        fn render(&self, ctx: &RenderContext<'_, TestSettings, Recording>) {
            self.log.borrow_mut().push(format!("render:{}", self.header));
            self.seen.borrow_mut().push(Seen {
                container: ctx.container().element.clone(),
                plugin: Rc::as_ptr(ctx.plugin()) as *const (),
                settings: Rc::clone(ctx.settings()),
                save: ctx.save_settings(),
            });
        }
    }

    type Registry = SubTabRegistry<TestSettings, TestTab, Recording>;
    type Controller = SubTabController<TestSettings, TestTab, TestPlugin, Recording>;

    struct Fixture {
        log: Log,
        plugin: Rc<TestPlugin>,
        registry: Rc<Registry>,
        controller: Controller,
        general_seen: SeenLog,
        structure_seen: SeenLog,
    }

    impl Fixture {
        fn new(default_id: TestTab) -> Self {
            let log: Log = Rc::new(RefCell::new(Vec::new()));
            let plugin = TestPlugin::new();
            let general_seen: SeenLog = Rc::new(RefCell::new(Vec::new()));
            let structure_seen: SeenLog = Rc::new(RefCell::new(Vec::new()));
            let registry = Rc::new(Registry::from_fn(|id| match id {
                TestTab::General => TestSubTab::boxed("General", &log, &general_seen),
                TestTab::Structure => TestSubTab::boxed("Structure", &log, &structure_seen),
            }));
            let controller = Controller::new(
                Recording::root(&log),
                Rc::clone(&plugin),
                Rc::clone(&registry),
                default_id,
            )
            .unwrap();

            Self {
                log,
                plugin,
                registry,
                controller,
                general_seen,
                structure_seen,
            }
        }

        fn take_log(&self) -> Vec<String> {
            std::mem::take(&mut *self.log.borrow_mut())
        }

        fn navigation_buttons(&self) -> Vec<Element> {
            self.controller
                .container()
                .element
                .find_by_class(NAV_CLASS)
                .unwrap()
                .children()
        }

        fn display_cycles(&self) -> usize {
            self.log.borrow().iter().filter(|e| *e == "empty").count()
        }
    }

    #[test]
    fn test_construction_stores_references() {
        let fixture = Fixture::new(TestTab::Structure);

        assert_eq!(fixture.controller.active_id(), TestTab::Structure);
        assert!(Rc::ptr_eq(fixture.controller.registry(), &fixture.registry));
        assert!(Rc::ptr_eq(fixture.controller.plugin(), &fixture.plugin));
        // Construction does not render.
        assert!(fixture.take_log().is_empty());
    }

    #[test]
    fn test_construction_rejects_unregistered_default() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Lonely {
            Only,
        }

        impl SubTabId for Lonely {
            const ALL: &'static [Self] = &[];

            fn as_str(&self) -> &'static str {
                "only"
            }
        }

        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let registry = Rc::new(SubTabRegistry::<TestSettings, Lonely, Recording>::from_fn(
            |_| unreachable!(),
        ));
        assert!(registry.is_empty());

        let result = SubTabController::new(
            Recording::root(&log),
            TestPlugin::new(),
            registry,
            Lonely::Only,
        );
        assert!(matches!(
            result,
            Err(SubTabError::DefaultNotRegistered("only"))
        ));
    }

    #[test]
    fn test_display_call_order() {
        let fixture = Fixture::new(TestTab::General);

        fixture.controller.display().unwrap();

        assert_eq!(
            fixture.take_log(),
            vec![
                "empty",
                "div:plugin-settings-subtab-nav",
                "div:plugin-settings-subtab-content",
                "button:General",
                "button:Structure",
                "render:General",
            ]
        );
    }

    #[test]
    fn test_display_replaces_previous_content() {
        let fixture = Fixture::new(TestTab::General);

        fixture.controller.display().unwrap();
        let first_nav = fixture.navigation_buttons();
        fixture.controller.display().unwrap();

        let root = &fixture.controller.container().element;
        assert_eq!(root.children().len(), 2);
        assert_eq!(fixture.navigation_buttons().len(), 2);
        assert!(!first_nav[0].ptr_eq(&fixture.navigation_buttons()[0]));
    }

    #[test]
    fn test_navigation_one_control_per_sub_tab() {
        let fixture = Fixture::new(TestTab::General);
        let nav = Recording::root(&fixture.log);

        fixture.controller.render_navigation(&nav);

        let buttons = nav.element.children();
        let labels: Vec<_> = buttons.iter().map(|b| b.text()).collect();
        assert_eq!(labels, vec!["General", "Structure"]);
        assert!(buttons[0].has_class(ACTIVE_CLASS));
        assert!(!buttons[1].has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_navigation_follows_registry_order() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let seen: SeenLog = Rc::new(RefCell::new(Vec::new()));
        let entry = |id, header| -> (TestTab, Box<dyn SubTab<TestSettings, Recording>>) {
            (id, TestSubTab::boxed(header, &log, &seen))
        };
        let registry = Rc::new(
            Registry::from_entries([
                entry(TestTab::Structure, "Structure"),
                entry(TestTab::General, "General"),
            ])
            .unwrap(),
        );
        let controller =
            Controller::new(Recording::root(&log), TestPlugin::new(), registry, TestTab::General)
                .unwrap();

        controller.display().unwrap();

        let buttons = controller
            .container()
            .element
            .find_by_class(NAV_CLASS)
            .unwrap()
            .children();
        let labels: Vec<_> = buttons.iter().map(|b| b.text()).collect();
        assert_eq!(labels, vec!["Structure", "General"]);
        assert!(!buttons[0].has_class(ACTIVE_CLASS));
        assert!(buttons[1].has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_clicking_other_tab_switches_and_redisplays() {
        let fixture = Fixture::new(TestTab::General);
        fixture.controller.display().unwrap();
        fixture.take_log();

        fixture.navigation_buttons()[1].click();

        assert_eq!(fixture.controller.active_id(), TestTab::Structure);
        assert_eq!(fixture.display_cycles(), 1);
        assert!(fixture.take_log().contains(&"render:Structure".to_string()));

        let buttons = fixture.navigation_buttons();
        assert!(!buttons[0].has_class(ACTIVE_CLASS));
        assert!(buttons[1].has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_clicking_active_tab_does_nothing() {
        let fixture = Fixture::new(TestTab::General);
        fixture.controller.display().unwrap();
        fixture.take_log();

        fixture.navigation_buttons()[0].click();

        assert_eq!(fixture.controller.active_id(), TestTab::General);
        assert!(fixture.take_log().is_empty());

        // Stale controls from an earlier render still compare against live state.
        let stale_structure = fixture.navigation_buttons()[1].clone();
        stale_structure.click();
        fixture.take_log();
        stale_structure.click();
        assert_eq!(fixture.controller.active_id(), TestTab::Structure);
        assert_eq!(fixture.display_cycles(), 0);
    }

    #[test]
    fn test_controls_inert_after_controller_dropped() {
        let fixture = Fixture::new(TestTab::General);
        fixture.controller.display().unwrap();
        let buttons = fixture.navigation_buttons();
        let log = Rc::clone(&fixture.log);
        drop(fixture);
        log.borrow_mut().clear();

        assert!(buttons[1].click());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_render_active_sub_tab_context() {
        let fixture = Fixture::new(TestTab::Structure);
        let content = Recording::root(&fixture.log);

        fixture.controller.render_active_sub_tab(&content).unwrap();

        assert_eq!(fixture.take_log(), vec!["render:Structure"]);
        let structure = fixture.registry.get(TestTab::Structure).unwrap();
        assert_eq!(structure.header(), "Structure");

        let plugin = &fixture.plugin;
        let seen = fixture.structure_seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].container.ptr_eq(&content.element));
        assert_eq!(seen[0].plugin, Rc::as_ptr(plugin) as *const ());
        assert!(Rc::ptr_eq(&seen[0].settings, &plugin.settings));
        assert_eq!(seen[0].settings.borrow().value, "initial");
        assert!(fixture.general_seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_context_save_calls_plugin_once() {
        let fixture = Fixture::new(TestTab::General);
        let content = Recording::root(&fixture.log);
        fixture.controller.render_active_sub_tab(&content).unwrap();

        let entry = fixture.general_seen.borrow_mut().pop().unwrap();
        assert_eq!(fixture.plugin.saves.get(), 1);
        entry.save.await.unwrap();

        assert_eq!(fixture.plugin.saves.get(), 1);
    }

    #[test]
    fn test_unresolved_active_fails_fast() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Lonely {
            Only,
        }

        impl SubTabId for Lonely {
            const ALL: &'static [Self] = &[];

            fn as_str(&self) -> &'static str {
                "only"
            }
        }

        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let registry = Rc::new(SubTabRegistry::<TestSettings, Lonely, Recording>::from_fn(
            |_| unreachable!(),
        ));
        let controller = SubTabController::unchecked(
            Recording::root(&log),
            TestPlugin::new(),
            registry,
            Lonely::Only,
        );

        let nav = Recording::root(&log);
        controller.render_navigation(&nav);
        assert!(nav.element.children().is_empty());

        let err = controller
            .render_active_sub_tab(&Recording::root(&log))
            .unwrap_err();
        assert!(matches!(err, SubTabError::UnregisteredSubTab("only")));
        assert!(controller.display().is_err());
    }

    #[test]
    fn test_general_structure_scenario() {
        let fixture = Fixture::new(TestTab::General);
        fixture.controller.display().unwrap();

        let buttons = fixture.navigation_buttons();
        assert_eq!(buttons[0].text(), "General");
        assert_eq!(buttons[1].text(), "Structure");
        assert!(buttons[0].has_class(ACTIVE_CLASS));

        buttons[1].click();

        assert_eq!(fixture.controller.active_id(), TestTab::Structure);
        let buttons = fixture.navigation_buttons();
        assert!(buttons[1].has_class(ACTIVE_CLASS));
        assert!(!buttons[0].has_class(ACTIVE_CLASS));
    }
}
