//! Panel dispatch
//!
//! Maps a window's content to the panel that renders it. Panels live
//! outside this crate; they implement [`Panels`] and see their window only
//! through a [`PanelFrame`], so any change they want goes back to the shell
//! as a [`WindowCommand`].

mod command;

pub use command::{CommandQueue, WindowCommand};

use serde::Serialize;
use crate::math::{Size, Vec2};
use crate::window::{AgentDashboardData, CopilotData, FlowData, GateInData, Window, WindowContent};

/// Which panel a window shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    GateIn,
    /// Notice that the 2D flow editor was retired
    FlowRetired,
    Flow3d,
    Copilot,
    Adapters,
    AgentDashboard,
    /// Diagnostic for content this build does not know
    Placeholder,
}

impl PanelKind {
    /// Select the panel for a content value. Never fails.
    pub fn for_content(content: &WindowContent) -> Self {
        match content {
            WindowContent::GateIn(_) => PanelKind::GateIn,
            WindowContent::Flow => PanelKind::FlowRetired,
            WindowContent::Flow3d(_) => PanelKind::Flow3d,
            WindowContent::Copilot(_) => PanelKind::Copilot,
            WindowContent::Adapters => PanelKind::Adapters,
            WindowContent::AgentDashboard(_) => PanelKind::AgentDashboard,
            WindowContent::Unknown { .. } => PanelKind::Placeholder,
        }
    }
}

/// What a panel gets to see while rendering
pub struct PanelFrame<'a> {
    window: &'a Window,
    active: bool,
    queue: &'a mut CommandQueue,
}

impl<'a> PanelFrame<'a> {
    pub fn new(window: &'a Window, active: bool, queue: &'a mut CommandQueue) -> Self {
        Self { window, active, queue }
    }

    /// Read-only view of the hosting window
    #[inline]
    pub fn window(&self) -> &Window {
        self.window
    }

    /// Window has focus
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Queue a command for the hosting window
    pub fn send(&mut self, command: WindowCommand) {
        self.queue.push(self.window.id.clone(), command);
    }

    pub fn close(&mut self) {
        self.send(WindowCommand::Close);
    }

    pub fn minimize(&mut self) {
        self.send(WindowCommand::Minimize);
    }

    pub fn maximize(&mut self) {
        self.send(WindowCommand::Maximize);
    }

    pub fn restore(&mut self) {
        self.send(WindowCommand::Restore);
    }

    pub fn bring_to_front(&mut self) {
        self.send(WindowCommand::BringToFront);
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.send(WindowCommand::Move { position });
    }

    pub fn resize(&mut self, size: Size) {
        self.send(WindowCommand::Resize { size });
    }
}

/// Renderers for every panel kind
pub trait Panels {
    /// Whatever the host renders into (markup, a widget handle, ...)
    type Output;

    fn gate_in(&mut self, frame: &mut PanelFrame<'_>, data: &GateInData) -> Self::Output;

    fn flow_retired(&mut self, frame: &mut PanelFrame<'_>) -> Self::Output;

    fn flow_3d(&mut self, frame: &mut PanelFrame<'_>, data: &FlowData) -> Self::Output;

    fn copilot(&mut self, frame: &mut PanelFrame<'_>, data: &CopilotData) -> Self::Output;

    fn adapters(&mut self, frame: &mut PanelFrame<'_>) -> Self::Output;

    fn agent_dashboard(&mut self, frame: &mut PanelFrame<'_>, data: &AgentDashboardData) -> Self::Output;

    /// Content tag with no panel; `kind` is the raw tag
    fn placeholder(&mut self, frame: &mut PanelFrame<'_>, kind: &str) -> Self::Output;
}

/// Render one window through the matching panel
pub fn render<P: Panels>(panels: &mut P, frame: &mut PanelFrame<'_>) -> P::Output {
    let window = frame.window;
    match &window.content {
        WindowContent::GateIn(data) => panels.gate_in(frame, data),
        WindowContent::Flow => panels.flow_retired(frame),
        WindowContent::Flow3d(data) => panels.flow_3d(frame, data),
        WindowContent::Copilot(data) => panels.copilot(frame, data),
        WindowContent::Adapters => panels.adapters(frame),
        WindowContent::AgentDashboard(data) => panels.agent_dashboard(frame, data),
        WindowContent::Unknown { kind, .. } => panels.placeholder(frame, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowConfig;
    use serde_json::json;

    /// Records which panel ran and closes every copilot window it sees
    struct Recorder;

    impl Panels for Recorder {
        type Output = String;

        fn gate_in(&mut self, _: &mut PanelFrame<'_>, data: &GateInData) -> String {
            format!("gateIn:{}", data.target.as_deref().unwrap_or("-"))
        }
        fn flow_retired(&mut self, _: &mut PanelFrame<'_>) -> String {
            "retired".into()
        }
        fn flow_3d(&mut self, _: &mut PanelFrame<'_>, _: &FlowData) -> String {
            "flow3d".into()
        }
        fn copilot(&mut self, frame: &mut PanelFrame<'_>, _: &CopilotData) -> String {
            frame.close();
            "copilot".into()
        }
        fn adapters(&mut self, _: &mut PanelFrame<'_>) -> String {
            "adapters".into()
        }
        fn agent_dashboard(&mut self, _: &mut PanelFrame<'_>, _: &AgentDashboardData) -> String {
            "agents".into()
        }
        fn placeholder(&mut self, _: &mut PanelFrame<'_>, kind: &str) -> String {
            format!("unknown:{kind}")
        }
    }

    fn window(content: WindowContent) -> Window {
        WindowConfig::new("w", "W", content).into_window(101)
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(PanelKind::for_content(&WindowContent::Flow), PanelKind::FlowRetired);
        assert_eq!(PanelKind::for_content(&WindowContent::Adapters), PanelKind::Adapters);
        let unknown = WindowContent::Unknown { kind: "terminal".into(), data: json!({}) };
        assert_eq!(PanelKind::for_content(&unknown), PanelKind::Placeholder);
    }

    #[test]
    fn test_render_dispatches_payload() {
        let w = window(WindowContent::GateIn(GateInData { target: Some("Notion".into()) }));
        let mut queue = CommandQueue::new();
        let out = render(&mut Recorder, &mut PanelFrame::new(&w, true, &mut queue));
        assert_eq!(out, "gateIn:Notion");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unknown_renders_placeholder() {
        let w = window(WindowContent::Unknown { kind: "terminal".into(), data: json!({"a": 1}) });
        let mut queue = CommandQueue::new();
        let out = render(&mut Recorder, &mut PanelFrame::new(&w, false, &mut queue));
        assert_eq!(out, "unknown:terminal");
    }

    #[test]
    fn test_panel_commands_are_queued() {
        let w = window(WindowContent::default());
        let mut queue = CommandQueue::new();
        render(&mut Recorder, &mut PanelFrame::new(&w, true, &mut queue));

        let queued: Vec<_> = queue.drain().collect();
        assert_eq!(queued, vec![(w.id.clone(), WindowCommand::Close)]);
    }
}
