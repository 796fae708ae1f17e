//! Position model: item identity -> slot
//!
//! Slots stay a dense permutation of `0..len` as long as writers go through
//! [`PositionMap::move_to`]. [`PositionMap::set`] is a raw overwrite and
//! leaves compaction to the caller.

use std::collections::HashMap;

use crate::error::GridError;

/// Authoritative slot for every item in the grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionMap {
    slots: HashMap<String, usize>,
    /// Bumped on every mutation so readers can notice changes
    revision: u64,
}

impl PositionMap {
    /// Build from list order (slot = list index).
    ///
    /// Fails on duplicate or empty ids rather than producing a map that
    /// breaks the permutation invariant.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots = HashMap::new();
        for (index, id) in ids.into_iter().enumerate() {
            let id = id.as_ref();
            if id.is_empty() {
                return Err(GridError::EmptyId { index });
            }
            if slots.insert(id.to_string(), index).is_some() {
                return Err(GridError::DuplicateId(id.to_string()));
            }
        }
        Ok(Self { slots, revision: 0 })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.slots.get(id).copied()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Overwrite one item's slot without touching the others
    pub fn set(&mut self, id: &str, slot: usize) -> Result<(), GridError> {
        let len = self.slots.len();
        if slot >= len {
            return Err(GridError::SlotOutOfRange { slot, len });
        }
        let entry = self
            .slots
            .get_mut(id)
            .ok_or_else(|| GridError::UnknownId(id.to_string()))?;
        *entry = slot;
        self.revision += 1;
        Ok(())
    }

    /// Move `id` to `target`, shifting every item strictly between the old
    /// and new slot by one toward the vacated slot.
    ///
    /// Returns `Ok(false)` when the item is already at `target`.
    pub fn move_to(&mut self, id: &str, target: usize) -> Result<bool, GridError> {
        let len = self.slots.len();
        if target >= len {
            return Err(GridError::SlotOutOfRange { slot: target, len });
        }
        let old = self.get(id).ok_or_else(|| GridError::UnknownId(id.to_string()))?;
        if old == target {
            return Ok(false);
        }

        for (key, slot) in self.slots.iter_mut() {
            if key == id {
                continue;
            }
            if old < target {
                if *slot > old && *slot <= target {
                    *slot -= 1;
                }
            } else if *slot >= target && *slot < old {
                *slot += 1;
            }
        }
        self.slots.insert(id.to_string(), target);
        self.revision += 1;
        Ok(true)
    }

    /// Ids sorted by slot
    pub fn ordered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<(&str, usize)> = self.slots.iter().map(|(id, slot)| (id.as_str(), *slot)).collect();
        ids.sort_by_key(|(_, slot)| *slot);
        ids.into_iter().map(|(id, _)| id).collect()
    }

    /// Whether the slots are exactly `{0, .., len-1}`
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.slots.len()];
        for &slot in self.slots.values() {
            match seen.get_mut(slot) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abcd() -> PositionMap {
        PositionMap::from_ids(["A", "B", "C", "D"]).unwrap()
    }

    #[test]
    fn test_init_from_list_order() {
        let map = abcd();
        assert_eq!(map.get("A"), Some(0));
        assert_eq!(map.get("D"), Some(3));
        assert_eq!(map.get("Z"), None);
        assert_eq!(map.ordered_ids(), vec!["A", "B", "C", "D"]);
        assert!(map.is_permutation());
    }

    #[test]
    fn test_rejects_duplicate_and_empty_ids() {
        assert_eq!(
            PositionMap::from_ids(["A", "B", "A"]),
            Err(GridError::DuplicateId("A".to_string()))
        );
        assert_eq!(PositionMap::from_ids(["A", ""]), Err(GridError::EmptyId { index: 1 }));
    }

    #[test]
    fn test_empty_map() {
        let map = PositionMap::from_ids(Vec::<String>::new()).unwrap();
        assert!(map.is_empty());
        assert!(map.is_permutation());
        assert!(map.ordered_ids().is_empty());
    }

    #[test]
    fn test_move_forward_rotates_range_left() {
        let mut map = abcd();
        assert!(map.move_to("A", 3).unwrap());
        assert_eq!(map.get("B"), Some(0));
        assert_eq!(map.get("C"), Some(1));
        assert_eq!(map.get("D"), Some(2));
        assert_eq!(map.get("A"), Some(3));
    }

    #[test]
    fn test_move_back_restores_order() {
        let mut map = abcd();
        map.move_to("A", 3).unwrap();
        map.move_to("A", 0).unwrap();
        assert_eq!(map.ordered_ids(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_move_to_middle_leaves_tail() {
        let mut map = abcd();
        map.move_to("A", 2).unwrap();
        assert_eq!(map.ordered_ids(), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_move_to_same_slot_is_noop() {
        let mut map = abcd();
        let rev = map.revision();
        assert!(!map.move_to("C", 2).unwrap());
        assert_eq!(map.revision(), rev);
    }

    #[test]
    fn test_move_errors() {
        let mut map = abcd();
        assert_eq!(map.move_to("Z", 0), Err(GridError::UnknownId("Z".to_string())));
        assert_eq!(map.move_to("A", 4), Err(GridError::SlotOutOfRange { slot: 4, len: 4 }));
    }

    #[test]
    fn test_set_is_raw_overwrite() {
        let mut map = abcd();
        map.set("A", 1).unwrap();
        // Two items now share slot 1; set does not compact
        assert!(!map.is_permutation());
        assert_eq!(map.set("A", 9), Err(GridError::SlotOutOfRange { slot: 9, len: 4 }));
    }

    proptest! {
        #[test]
        fn prop_moves_keep_permutation(
            n in 0usize..12,
            moves in prop::collection::vec((0usize..12, 0usize..12), 0..40),
        ) {
            let ids: Vec<String> = (0..n).map(|i| format!("note-{}", i)).collect();
            let mut map = PositionMap::from_ids(&ids).unwrap();
            for (who, target) in moves {
                if n == 0 {
                    break;
                }
                let id = &ids[who % n];
                map.move_to(id, target % n).unwrap();
                prop_assert!(map.is_permutation());
            }
            prop_assert_eq!(map.len(), n);
        }
    }
}
