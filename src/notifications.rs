/// Desktop notifications
/// Only macOS is wired up; elsewhere these are no-ops

#[cfg(target_os = "macos")]
use std::process::Command;

#[cfg(target_os = "macos")]
fn display_notification(title: &str, body: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );

    if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
        tracing::debug!(error = %e, "osascript notification failed");
    }
}

/// Send a notification when a countdown runs out
pub fn notify_time_up(task_name: &str) {
    #[cfg(target_os = "macos")]
    {
        display_notification("Roulette - Time is up", &format!("⏰ {}", task_name));
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = task_name;
    }
}

/// Send a notification when the current task is marked done
pub fn notify_task_done(task_name: &str) {
    #[cfg(target_os = "macos")]
    {
        display_notification("Roulette - Task Completed", task_name);
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = task_name;
    }
}
