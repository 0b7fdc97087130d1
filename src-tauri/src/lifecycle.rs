use crate::{
    app_types::{LifecyclePhase, ShellState},
    shell_host::ShellHost,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllWindowsClosedOutcome {
    Terminated,
    KeepAlive,
    AlreadyTerminated,
}

/// Releases the main window reference once the window is gone.
pub fn handle_window_closed<W, F>(state: &ShellState<W>, log: F)
where
    F: Fn(&str),
{
    match state.take_main_window() {
        Ok(Some(_)) => log("desktop window closed"),
        Ok(None) => log("desktop window closed (no window was tracked)"),
        Err(error) => {
            log(&format!("failed to release main window: {error}"));
            return;
        }
    }

    if state.phase() == LifecyclePhase::WindowOpen {
        if let Err(error) = state.set_phase(LifecyclePhase::NoWindow) {
            log(&format!("failed to update lifecycle phase: {error}"));
        }
    }
}

pub fn handle_all_windows_closed<H, F>(
    state: &ShellState<H::Window>,
    host: &H,
    log: F,
) -> AllWindowsClosedOutcome
where
    H: ShellHost,
    F: Fn(&str),
{
    if state.phase() == LifecyclePhase::Terminated {
        return AllWindowsClosedOutcome::AlreadyTerminated;
    }

    if state.config.platform.keeps_alive_without_windows {
        log("all windows closed, staying alive per platform convention");
        return AllWindowsClosedOutcome::KeepAlive;
    }

    log("all windows closed, quitting desktop shell...");
    if let Err(error) = state.set_phase(LifecyclePhase::Terminated) {
        log(&format!("failed to update lifecycle phase: {error}"));
    }
    host.terminate(0);
    AllWindowsClosedOutcome::Terminated
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequestAction {
    Allow,
    Prevent,
}

pub fn exit_request_action(outcome: AllWindowsClosedOutcome) -> ExitRequestAction {
    match outcome {
        // Termination goes through the host with an explicit code.
        AllWindowsClosedOutcome::Terminated | AllWindowsClosedOutcome::KeepAlive => {
            ExitRequestAction::Prevent
        }
        AllWindowsClosedOutcome::AlreadyTerminated => ExitRequestAction::Allow,
    }
}

/// Maps a host exit request onto the all-windows-closed handling.
///
/// Requests carrying an exit code come from an explicit `exit` and always pass.
/// So does a quit while the main window is still open.
pub fn handle_exit_request<H, F>(
    state: &ShellState<H::Window>,
    host: &H,
    code: Option<i32>,
    log: F,
) -> ExitRequestAction
where
    H: ShellHost,
    F: Fn(&str),
{
    if code.is_some() || state.has_main_window() {
        return ExitRequestAction::Allow;
    }

    exit_request_action(handle_all_windows_closed(state, host, log))
}

/// Explicit quit from the host. Exit is already underway, so this only records it.
pub fn handle_quit<W, F>(state: &ShellState<W>, log: F)
where
    F: Fn(&str),
{
    log("desktop shell is quitting...");
    if let Err(error) = state.set_phase(LifecyclePhase::Terminated) {
        log(&format!("failed to update lifecycle phase: {error}"));
    }
}
