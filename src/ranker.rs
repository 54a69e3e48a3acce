use crate::task::{Task, TaskList};

/// One row of the display order: the task plus where it lives in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub position: usize,
    pub task: &'a Task,
}

/// Order tasks red, then yellow, then green. Tasks of the same color keep
/// their insertion order. The list itself is left as it is.
pub fn rank(list: &TaskList) -> Vec<Ranked<'_>> {
    let mut ranked: Vec<Ranked<'_>> = list
        .iter()
        .enumerate()
        .map(|(position, task)| Ranked { position, task })
        .collect();
    // `sort_by_key` is stable
    ranked.sort_by_key(|r| r.task.color.priority());
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{strategy, Color};
    use proptest::prelude::*;

    fn texts(ranked: &[Ranked<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.task.text.clone()).collect()
    }

    #[test]
    fn red_first_and_ties_keep_insertion_order() {
        let list: TaskList = vec![
            Task::new("a", Color::Green),
            Task::new("b", Color::Red),
            Task::new("c", Color::Red),
        ]
        .into();
        assert_eq!(texts(&rank(&list)), ["b", "c", "a"]);
    }

    #[test]
    fn yellow_sits_between_red_and_green() {
        let list: TaskList = vec![
            Task::new("g", Color::Green),
            Task::new("y", Color::Yellow),
            Task::new("r", Color::Red),
        ]
        .into();
        assert_eq!(texts(&rank(&list)), ["r", "y", "g"]);
    }

    #[test]
    fn ranking_is_idempotent_on_sorted_input() {
        let list: TaskList = vec![
            Task::new("r1", Color::Red),
            Task::new("r2", Color::Red),
            Task::new("y", Color::Yellow),
            Task::new("g", Color::Green),
        ]
        .into();
        let once: TaskList = rank(&list).into_iter().map(|r| r.task.clone()).collect();
        assert_eq!(once, list);
        let twice: TaskList = rank(&once).into_iter().map(|r| r.task.clone()).collect();
        assert_eq!(twice, once);
    }

    #[test]
    fn ranking_leaves_list_order_alone() {
        let list: TaskList = vec![Task::new("a", Color::Green), Task::new("b", Color::Red)].into();
        let before = list.clone();
        let _ = rank(&list);
        assert_eq!(list, before);
    }

    #[test]
    fn positions_point_back_into_storage_order() {
        let list: TaskList = vec![
            Task::new("a", Color::Green),
            Task::new("b", Color::Yellow),
            Task::new("c", Color::Red),
        ]
        .into();
        for row in rank(&list) {
            assert_eq!(list.get(row.position), Some(row.task));
        }
        let positions: Vec<usize> = rank(&list).iter().map(|r| r.position).collect();
        assert_eq!(positions, [2, 1, 0]);
    }

    #[test]
    fn stable_across_many_interleaved_ties() {
        let colors = [Color::Green, Color::Red, Color::Yellow];
        let list: TaskList = (0..60)
            .map(|i| Task::new(i.to_string(), colors[i % 3]))
            .collect();
        let ranked = rank(&list);
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.task.color.priority() <= b.task.color.priority());
            if a.task.color == b.task.color {
                assert!(a.position < b.position);
            }
        }
    }

    proptest! {
        #[test]
        fn ranking_is_stable_and_ordered(list in strategy::task_list(0..40)) {
            let ranked = rank(&list);
            prop_assert_eq!(ranked.len(), list.len());
            for pair in ranked.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.task.color.priority() <= b.task.color.priority());
                if a.task.color == b.task.color {
                    prop_assert!(a.position < b.position);
                }
            }
            let mut positions: Vec<usize> = ranked.iter().map(|r| r.position).collect();
            positions.sort_unstable();
            prop_assert_eq!(positions, (0..list.len()).collect::<Vec<_>>());
        }

        #[test]
        fn ranking_is_pure_and_repeatable(list in strategy::task_list(0..40)) {
            let before = list.clone();
            let first = rank(&list);
            let second = rank(&list);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&list, &before);

            let sorted: TaskList = first.iter().map(|r| r.task.clone()).collect();
            let again: TaskList = rank(&sorted).into_iter().map(|r| r.task.clone()).collect();
            prop_assert_eq!(again, sorted);
        }
    }
}
