use crate::features::venues::models::Venue;

/// 1-based position of `target_id` among `peers` ordered by likes desc, id asc.
///
/// With a window only the first `window` positions count; anything past it,
/// or a target missing from `peers`, is unranked.
pub fn rank_position(peers: &[Venue], target_id: i64, window: Option<usize>) -> Option<u32> {
    let mut ordered: Vec<(i64, i64)> = peers.iter().map(|v| (v.likes_count, v.id)).collect();
    ordered.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    let limit = window.unwrap_or(ordered.len());

    ordered
        .iter()
        .take(limit)
        .position(|(_, id)| *id == target_id)
        .and_then(|index| u32::try_from(index + 1).ok())
}
