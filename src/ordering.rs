//! Process ordering rules.
//!
//! Every engine resolves ties with the same total order: earlier arrival
//! first, then lower process ID. SJF layers burst time in front of it.
//!
//! | Order | Keys (ascending) |
//! |-------|------------------|
//! | Arrival (FIFO) | arrival_time, id |
//! | Shortest job (SPT) | burst_time, arrival_time, id |
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use std::cmp::Ordering;

use crate::models::Process;

/// Total order by `(arrival_time, id)`.
///
/// The sole tie-break rule: any two processes that are equally eligible
/// are dispatched in this order. IDs are unique for validated input, so
/// this never returns `Equal` for distinct processes.
#[inline]
pub fn arrival_order(a: &Process, b: &Process) -> Ordering {
    a.arrival_time
        .cmp(&b.arrival_time)
        .then_with(|| a.id.cmp(&b.id))
}

/// Shortest burst first, falling back to [`arrival_order`].
#[inline]
pub fn shortest_job_order(a: &Process, b: &Process) -> Ordering {
    a.burst_time
        .cmp(&b.burst_time)
        .then_with(|| arrival_order(a, b))
}

/// Indices into `processes`, sorted by [`arrival_order`].
pub fn sort_by_arrival(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by(|&a, &b| arrival_order(&processes[a], &processes[b]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order_primary_key() {
        let early = Process::new(9, 0, 10);
        let late = Process::new(1, 5, 1);
        assert_eq!(arrival_order(&early, &late), Ordering::Less);
        assert_eq!(arrival_order(&late, &early), Ordering::Greater);
    }

    #[test]
    fn test_arrival_order_tie_by_id() {
        let a = Process::new(1, 3, 8);
        let b = Process::new(2, 3, 1);
        assert_eq!(arrival_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_shortest_job_order() {
        let long = Process::new(1, 0, 8);
        let short = Process::new(2, 4, 3);
        assert_eq!(shortest_job_order(&short, &long), Ordering::Less);

        // Equal bursts → earlier arrival
        let a = Process::new(5, 1, 3);
        let b = Process::new(4, 2, 3);
        assert_eq!(shortest_job_order(&a, &b), Ordering::Less);

        // Equal bursts and arrivals → lower id
        let c = Process::new(3, 1, 3);
        assert_eq!(shortest_job_order(&c, &a), Ordering::Less);
    }

    #[test]
    fn test_sort_by_arrival() {
        let processes = vec![
            Process::new(3, 4, 1),
            Process::new(2, 0, 1),
            Process::new(1, 4, 1),
        ];
        let order = sort_by_arrival(&processes);
        let ids: Vec<u32> = order.iter().map(|&i| processes[i].id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_by_arrival(&[]).is_empty());
    }
}
