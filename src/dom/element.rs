// Retained element tree.
// Nodes are shared handles; click handlers are cloned out before running so a
// handler may rebuild the tree it was attached to.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Container;

/// Kind of node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Div,
    Button,
}

struct Node {
    kind: ElementKind,
    text: String,
    classes: Vec<String>,
    children: Vec<Element>,
    on_click: Option<Rc<dyn Fn()>>,
}

/// Shared handle to a node.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    fn new(kind: ElementKind) -> Self {
        Element(Rc::new(RefCell::new(Node {
            kind,
            text: String::new(),
            classes: Vec::new(),
            children: Vec::new(),
            on_click: None,
        })))
    }

    /// Create a detached root region.
    pub fn root() -> Self {
        Self::new(ElementKind::Div)
    }

    pub fn kind(&self) -> ElementKind {
        self.0.borrow().kind
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn has_class(&self, cls: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == cls)
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Run the click handler. Returns false if none is registered.
    pub fn click(&self) -> bool {
        let handler = self.0.borrow().on_click.clone();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// All nodes below this one, depth first, paired with their depth (children = 0).
    pub fn descendants(&self) -> Vec<(usize, Element)> {
        let mut out = Vec::new();
        self.collect_descendants(0, &mut out);
        out
    }

    fn collect_descendants(&self, depth: usize, out: &mut Vec<(usize, Element)>) {
        for child in self.children() {
            out.push((depth, child.clone()));
            child.collect_descendants(depth + 1, out);
        }
    }

    /// First descendant carrying `cls`.
    pub fn find_by_class(&self, cls: &str) -> Option<Element> {
        self.descendants()
            .into_iter()
            .map(|(_, el)| el)
            .find(|el| el.has_class(cls))
    }

    /// Descendant controls, in document order.
    pub fn buttons(&self) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .map(|(_, el)| el)
            .filter(|el| el.kind() == ElementKind::Button)
            .collect()
    }

    fn append(&self, kind: ElementKind) -> Element {
        let child = Element::new(kind);
        self.0.borrow_mut().children.push(child.clone());
        child
    }
}

impl Container for Element {
    fn empty(&self) {
        // Take the children out first so dropping them cannot re-enter this node.
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        drop(children);
    }

    fn create_div(&self, cls: &str) -> Self {
        let div = self.append(ElementKind::Div);
        div.add_class(cls);
        div
    }

    fn create_button(&self, text: &str) -> Self {
        let button = self.append(ElementKind::Button);
        button.set_text(text);
        button
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn add_class(&self, cls: &str) {
        if !cls.is_empty() && !self.has_class(cls) {
            self.0.borrow_mut().classes.push(cls.to_string());
        }
    }

    fn remove_class(&self, cls: &str) {
        self.0.borrow_mut().classes.retain(|c| c != cls);
    }

    fn on_click(&self, handler: Box<dyn Fn()>) {
        self.0.borrow_mut().on_click = Some(Rc::from(handler));
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("kind", &node.kind)
            .field("text", &node.text)
            .field("classes", &node.classes)
            .field("children", &node.children)
            .field("clickable", &node.on_click.is_some())
            .finish()
    }
}
