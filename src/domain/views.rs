use super::task::Task;
use std::time::Duration;

/// A row of the grouped task list: either a group header or a task
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow<'a> {
    Group { label: String, count: usize },
    Task(&'a Task),
}

/// Group tasks by their group name, in order of first appearance.
///
/// Tasks without a group land under "No group".
pub fn group_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<(String, Vec<&'a Task>)> {
    let mut groups: Vec<(String, Vec<&'a Task>)> = Vec::new();

    for task in tasks {
        let label = match &task.group {
            Some(group) => format!("🧩 {}", group),
            None => "No group".to_string(),
        };
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, members)) => members.push(task),
            None => groups.push((label, vec![task])),
        }
    }

    groups
}

/// Flatten grouped tasks into display rows (header, then its tasks)
pub fn flatten_groups<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<ListRow<'a>> {
    let mut rows = Vec::new();
    for (label, members) in group_tasks(tasks) {
        rows.push(ListRow::Group {
            label,
            count: members.len(),
        });
        rows.extend(members.into_iter().map(ListRow::Task));
    }
    rows
}

/// Format remaining time as "m:ss" (floored to whole seconds)
pub fn format_remaining(remaining: Duration) -> String {
    let total_secs = remaining.as_secs();
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Badge shown next to a task in the list
pub fn status_badge(task: &Task) -> &'static str {
    if task.done {
        "Done ✅"
    } else {
        "Active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;

    fn task(name: &str, group: &str) -> Task {
        Task::from_draft(&TaskDraft::new(name, "10", "Home", group)).unwrap()
    }

    #[test]
    fn test_group_tasks_keeps_first_appearance_order() {
        let tasks = vec![task("a", "Chores"), task("b", ""), task("c", "Chores")];
        let groups = group_tasks(&tasks);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "🧩 Chores");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].name, "c");
        assert_eq!(groups[1].0, "No group");
    }

    #[test]
    fn test_flatten_groups() {
        let tasks = vec![task("a", ""), task("b", "Fun")];
        let rows = flatten_groups(&tasks);

        assert_eq!(rows.len(), 4);
        assert!(matches!(&rows[0], ListRow::Group { count: 1, .. }));
        assert!(matches!(&rows[1], ListRow::Task(t) if t.name == "a"));
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Duration::from_millis(59_999)), "0:59");
        assert_eq!(format_remaining(Duration::from_secs(60)), "1:00");
        assert_eq!(format_remaining(Duration::from_secs(605)), "10:05");
        assert_eq!(format_remaining(Duration::ZERO), "0:00");
    }
}
