pub trait SliceExt<T> {
    /// Get mutable references to two distinct elements of a slice. Returns
    /// `None` if they are the same element or either is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut stacks = [vec![1, 2], vec![3]];
    ///
    /// let (from, to) = stacks.get_mut2(0, 1).unwrap();
    /// to.extend(from.pop());
    /// assert_eq!(stacks, [vec![1], vec![3, 2]]);
    ///
    /// assert!(stacks.get_mut2(1, 1).is_none());
    /// assert!(stacks.get_mut2(0, 2).is_none());
    /// ```
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        if a == b || a.max(b) >= self.len() {
            return None;
        }

        if a < b {
            let (head, tail) = self.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }
}
