//! Capacity-bounded, order-preserving target storage

use super::state::Target;

/// Ordered collection of live targets.
///
/// Removal shifts the tail down instead of swapping, so pool order is stable.
/// Hit resolution relies on that order when several targets overlap the ray.
#[derive(Debug, Clone)]
pub struct TargetPool {
    targets: Vec<Target>,
    capacity: usize,
}

impl TargetPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            targets: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.targets.len() >= self.capacity
    }

    /// Append a target. Returns false and leaves the pool untouched when full.
    pub fn try_push(&mut self, target: Target) -> bool {
        if self.is_full() {
            return false;
        }
        self.targets.push(target);
        true
    }

    /// Remove the target at `index`, shifting later targets down by one
    pub fn remove_at(&mut self, index: usize) -> Target {
        self.targets.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Target> {
        self.targets.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Target> {
        self.targets.iter_mut()
    }

    pub fn as_slice(&self) -> &[Target] {
        &self.targets
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Walk from the highest index down to zero, removing every target for
    /// which `remove` returns true. Removed targets are passed to `on_removed`
    /// in visit order.
    pub fn remove_where_rev<F, G>(&mut self, mut remove: F, mut on_removed: G)
    where
        F: FnMut(&Target) -> bool,
        G: FnMut(Target),
    {
        for i in (0..self.targets.len()).rev() {
            if remove(&self.targets[i]) {
                let target = self.remove_at(i);
                on_removed(target);
            }
        }
    }
}

impl<'a> IntoIterator for &'a TargetPool {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn tagged(x: f32) -> Target {
        Target {
            pos: Vec2::new(x, 0.0),
            size: Vec2::splat(50.0),
            friendly: false,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
        }
    }

    fn xs(pool: &TargetPool) -> Vec<f32> {
        pool.iter().map(|t| t.pos.x).collect()
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut pool = TargetPool::with_capacity(2);
        assert!(pool.try_push(tagged(0.0)));
        assert!(pool.try_push(tagged(1.0)));
        assert!(pool.is_full());
        assert!(!pool.try_push(tagged(2.0)));
        assert_eq!(xs(&pool), vec![0.0, 1.0]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut pool = TargetPool::with_capacity(5);
        for x in 0..5 {
            pool.try_push(tagged(x as f32));
        }
        let removed = pool.remove_at(1);
        assert_eq!(removed.pos.x, 1.0);
        assert_eq!(xs(&pool), vec![0.0, 2.0, 3.0, 4.0]);
        assert!(!pool.is_full());
    }

    #[test]
    fn test_remove_where_rev_visits_high_to_low() {
        let mut pool = TargetPool::with_capacity(6);
        for x in 0..6 {
            pool.try_push(tagged(x as f32));
        }
        let mut visited = Vec::new();
        let mut removed = Vec::new();
        pool.remove_where_rev(
            |t| {
                visited.push(t.pos.x);
                t.pos.x as i32 % 2 == 0
            },
            |t| removed.push(t.pos.x),
        );
        assert_eq!(visited, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
        assert_eq!(removed, vec![4.0, 2.0, 0.0]);
        assert_eq!(xs(&pool), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut pool = TargetPool::with_capacity(3);
        pool.try_push(tagged(0.0));
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 3);
    }
}
