//! Render views and panel dispatch

use serde::Serialize;
use crate::error::WindowError;
use crate::layout::SnapGuide;
use crate::math::Rect;
use crate::panel::{self, CommandQueue, PanelFrame, PanelKind, Panels, WindowCommand};
use crate::window::{Window, WindowId};
use super::{tolerate_missing, DesktopShell};

/// Everything a host needs to draw one window frame
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub panel: PanelKind,
    /// Raw content tag, shown by the placeholder panel
    pub kind: String,
    pub rect: Rect,
    pub z_index: u32,
    pub focused: bool,
    pub maximized: bool,
    pub dragging: bool,
    pub snap_guides: Vec<SnapGuide>,
}

impl WindowView {
    fn new(window: &Window, focused: bool) -> Self {
        Self {
            id: window.id.clone(),
            title: window.title.clone(),
            icon: window.icon.clone(),
            panel: PanelKind::for_content(&window.content),
            kind: window.content.kind().to_string(),
            rect: window.rect(),
            z_index: window.z_index,
            focused,
            maximized: window.is_maximized,
            dragging: window.is_dragging,
            snap_guides: window.snap_guides.clone(),
        }
    }
}

impl DesktopShell {
    /// Visible windows, back to front
    pub fn window_views(&self) -> Vec<WindowView> {
        let active = self.registry.active_window_id();
        self.registry
            .visible_windows()
            .into_iter()
            .map(|w| WindowView::new(w, active == Some(&w.id)))
            .collect()
    }

    /// Render every visible window back to front, then apply whatever the
    /// panels asked for.
    pub fn render_frame<P: Panels>(&mut self, panels: &mut P) -> Vec<(WindowId, P::Output)> {
        let mut queue = CommandQueue::new();
        let active = self.registry.active_window_id();

        let outputs: Vec<(WindowId, P::Output)> = self
            .registry
            .visible_windows()
            .into_iter()
            .map(|window| {
                let mut frame = PanelFrame::new(window, active == Some(&window.id), &mut queue);
                (window.id.clone(), panel::render(panels, &mut frame))
            })
            .collect();

        for (id, command) in queue.drain() {
            if let Err(err) = self.apply(id.as_str(), command) {
                tracing::warn!(window_id = %id, %err, "panel command rejected");
            }
        }
        outputs
    }

    /// Apply one command to a window. Missing windows are a no-op.
    pub fn apply(&mut self, id: &str, command: WindowCommand) -> Result<(), WindowError> {
        tracing::debug!(window_id = id, ?command, "applying window command");
        match command {
            WindowCommand::Close => self.close_window(id),
            WindowCommand::Minimize => self.minimize_window(id),
            WindowCommand::Maximize => self.maximize_window(id),
            WindowCommand::Restore => self.restore_window(id),
            WindowCommand::ToggleMaximize => self.toggle_maximize(id),
            WindowCommand::BringToFront => self.focus_window(id),
            WindowCommand::Move { position } => self.move_window(id, position.x, position.y),
            WindowCommand::Resize { size } => {
                tolerate_missing("resize", self.registry.update_window_size(id, size))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Vec2;
    use crate::panel::{PanelFrame, PanelKind, Panels, WindowCommand};
    use crate::shell::DesktopShell;
    use crate::window::{AgentDashboardData, CopilotData, FlowData, GateInData, WindowConfig, WindowContent};

    /// Gate-in panels close themselves once rendered; the copilot asks to move
    struct Host {
        rendered: Vec<String>,
    }

    impl Panels for Host {
        type Output = ();

        fn gate_in(&mut self, frame: &mut PanelFrame<'_>, _: &GateInData) {
            self.rendered.push(frame.window().id.to_string());
            frame.close();
        }
        fn flow_retired(&mut self, frame: &mut PanelFrame<'_>) {
            self.rendered.push(frame.window().id.to_string());
        }
        fn flow_3d(&mut self, frame: &mut PanelFrame<'_>, _: &FlowData) {
            self.rendered.push(frame.window().id.to_string());
        }
        fn copilot(&mut self, frame: &mut PanelFrame<'_>, _: &CopilotData) {
            self.rendered.push(frame.window().id.to_string());
            frame.move_to(Vec2::new(200.0, 200.0));
        }
        fn adapters(&mut self, frame: &mut PanelFrame<'_>) {
            self.rendered.push(frame.window().id.to_string());
        }
        fn agent_dashboard(&mut self, frame: &mut PanelFrame<'_>, _: &AgentDashboardData) {
            self.rendered.push(frame.window().id.to_string());
        }
        fn placeholder(&mut self, frame: &mut PanelFrame<'_>, _: &str) {
            self.rendered.push(frame.window().id.to_string());
        }
    }

    fn shell() -> DesktopShell {
        let mut shell = DesktopShell::new();
        shell.init(1920.0, 1080.0);
        shell
            .open_window(WindowConfig::new("gate", "Gate", WindowContent::GateIn(GateInData::default())).at(10.0, 100.0))
            .unwrap();
        shell
            .open_window(WindowConfig::new("chat", "Chat", WindowContent::default()).at(700.0, 100.0))
            .unwrap();
        shell
            .open_window(WindowConfig::new("hidden", "Hidden", WindowContent::Adapters).at(10.0, 500.0))
            .unwrap();
        shell.minimize_window("hidden").unwrap();
        shell
    }

    #[test]
    fn test_render_frame_applies_commands_after_rendering() {
        let mut shell = shell();
        let mut host = Host { rendered: Vec::new() };

        let outputs = shell.render_frame(&mut host);
        assert_eq!(outputs.len(), 2);
        assert_eq!(host.rendered, vec!["gate".to_string(), "chat".to_string()]);

        assert!(!shell.registry().contains("gate"));
        assert_eq!(shell.registry().get("chat").unwrap().position, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_window_views() {
        let shell = shell();
        let views = shell.window_views();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].panel, PanelKind::GateIn);
        assert_eq!(views[1].kind, "copilot");
        // Focus stays on the minimized window
        assert!(views.iter().all(|v| !v.focused));
        assert_eq!(shell.registry().active_window_id().unwrap(), "hidden");
    }

    #[test]
    fn test_apply_to_missing_window() {
        let mut shell = shell();
        shell.apply("ghost", WindowCommand::Minimize).unwrap();
        shell.apply("chat", WindowCommand::BringToFront).unwrap();
        assert_eq!(shell.registry().active_window_id().unwrap(), "chat");
    }
}
