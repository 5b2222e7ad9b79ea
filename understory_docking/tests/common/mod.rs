// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host shared by the integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::{Rect, Vec2};
use understory_docking::{
    ContextualFade, DockingConfig, DockingHost, OffsetSides, Position, PositionCss,
    ScrollableViewport,
};

/// A node in the fake element tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub rect: Rect,
    pub offset_parent: Option<u32>,
    pub ancestors: Vec<u32>,
    pub position: Position,
    pub sides: OffsetSides,
    pub css: Option<PositionCss>,
    pub classes: Vec<String>,
    pub marker: Option<Rect>,
    pub connected: bool,
}

impl Node {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            offset_parent: None,
            ancestors: Vec::new(),
            position: Position::Static,
            sides: OffsetSides::empty(),
            css: None,
            classes: Vec::new(),
            marker: None,
            connected: true,
        }
    }

    pub fn positioned(mut self, position: Position, sides: OffsetSides) -> Self {
        self.position = position;
        self.sides = sides;
        self
    }

    pub fn inside(mut self, offset_parent: u32, ancestors: &[u32]) -> Self {
        self.offset_parent = Some(offset_parent);
        self.ancestors = ancestors.to_vec();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Host whose geometry is set directly by the test.
#[derive(Debug)]
pub struct TestHost {
    pub nodes: HashMap<u32, Node>,
    pub body: Rect,
    pub window: Rect,
    pub window_scroll: Vec2,
    /// Read by [`window_region`].
    pub viewport: Rect,
    /// Read by [`scroll_container`].
    pub container: Option<(u32, Vec2)>,
    /// Read by [`contextual`].
    pub context: Option<Rect>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            body: Rect::new(0.0, 0.0, 1000.0, 3000.0),
            window: Rect::new(0.0, 0.0, 1000.0, 1000.0),
            window_scroll: Vec2::ZERO,
            viewport: Rect::new(0.0, 0.0, 1000.0, 1000.0),
            container: None,
            context: None,
        }
    }

    pub fn insert(&mut self, id: u32, node: Node) {
        self.nodes.insert(id, node);
    }

    pub fn node(&self, id: u32) -> &Node {
        &self.nodes[&id]
    }

    pub fn node_mut(&mut self, id: u32) -> &mut Node {
        self.nodes.get_mut(&id).expect("unknown node")
    }
}

impl DockingHost for TestHost {
    type Element = u32;

    fn is_connected(&self, element: u32) -> bool {
        self.node(element).connected
    }

    fn box_of(&self, element: u32) -> Rect {
        self.node(element).rect
    }

    fn body_box(&self) -> Rect {
        self.body
    }

    fn window_box(&self) -> Rect {
        self.window
    }

    fn window_scroll(&self) -> Vec2 {
        self.window_scroll
    }

    fn offset_parent(&self, element: u32) -> Option<u32> {
        self.node(element).offset_parent
    }

    fn contains(&self, ancestor: u32, descendant: u32) -> bool {
        self.node(descendant).ancestors.contains(&ancestor)
    }

    fn position(&self, element: u32) -> Position {
        self.node(element).position
    }

    fn offset_sides(&self, element: u32) -> OffsetSides {
        self.node(element).sides
    }

    fn apply_position(&mut self, element: u32, css: &PositionCss) {
        let node = self.node_mut(element);
        let mut sides = OffsetSides::empty();
        sides.set(OffsetSides::LEFT, css.left.is_some());
        sides.set(OffsetSides::TOP, css.top.is_some());
        sides.set(OffsetSides::RIGHT, css.right.is_some());
        sides.set(OffsetSides::BOTTOM, css.bottom.is_some());
        node.position = css.position;
        node.sides = sides;
        node.css = Some(*css);
    }

    fn clear_position(&mut self, element: u32) {
        let node = self.node_mut(element);
        node.position = Position::Static;
        node.sides = OffsetSides::empty();
        node.css = None;
    }

    fn add_class(&mut self, element: u32, class: &str) {
        let node = self.node_mut(element);
        if !node.has_class(class) {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: u32, class: &str) {
        self.node_mut(element).classes.retain(|c| c != class);
    }

    fn set_marker(&mut self, element: u32, marker: Option<Rect>) {
        self.node_mut(element).marker = marker;
    }
}

/// Records callback invocations in order.
#[derive(Clone, Debug, Default)]
pub struct Store(Rc<RefCell<Vec<&'static str>>>);

impl Store {
    pub fn adder(&self, label: &'static str) -> impl Fn(u32) + 'static {
        let log = Rc::clone(&self.0);
        move |_| log.borrow_mut().push(label)
    }

    pub fn take(&self) -> Vec<&'static str> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Config whose viewport is `host.viewport`, without scroll tracking.
pub fn window_region(store: &Store) -> DockingConfig<TestHost> {
    DockingConfig::new()
        .with_lazy_viewport(|host: &TestHost, _| ScrollableViewport::fixed(host.viewport))
        .on_docked(store.adder("docked"))
        .on_undocked(store.adder("undocked"))
}

/// Config whose viewport is the container named by `host.container`.
pub fn scroll_container(store: &Store) -> DockingConfig<TestHost> {
    DockingConfig::new()
        .with_lazy_viewport(|host: &TestHost, _| {
            let (id, offsets) = host.container.expect("no scroll container configured");
            ScrollableViewport::scrolling(host.box_of(id), id, offsets)
        })
        .on_docked(store.adder("docked"))
        .on_undocked(store.adder("undocked"))
}

/// Fade settings whose context box is `host.context`.
pub fn contextual(store: &Store) -> ContextualFade<TestHost> {
    ContextualFade::new("fade-in", "fade-out", "transition", |host: &TestHost, _| host.context)
        .on_show(store.adder("show"))
        .on_shown(store.adder("shown"))
        .on_hide(store.adder("hide"))
        .on_hidden(store.adder("hidden"))
}
