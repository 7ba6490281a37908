//! Board registry

use crate::error::BoardError;
use boardsig_core::AccountId;
use std::collections::HashSet;

/// Board size of the reference deployment
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Immutable set of board members
///
/// Keeps the construction order for listing and a hash index for
/// O(1) membership checks.
#[derive(Debug, Clone)]
pub struct BoardRegistry {
    members: Vec<AccountId>,
    index: HashSet<AccountId>,
}

impl BoardRegistry {
    /// Build the registry from exactly `board_size` distinct candidates
    pub fn new(board_size: usize, candidates: Vec<AccountId>) -> Result<Self, BoardError> {
        // A zero-seat board could never reach its threshold
        if board_size == 0 || candidates.len() != board_size {
            return Err(BoardError::InvalidBoardSize {
                expected: board_size,
                actual: candidates.len(),
            });
        }

        let mut index = HashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            if !index.insert(candidate.clone()) {
                return Err(BoardError::DuplicateMember(candidate.to_string()));
            }
        }

        Ok(Self {
            members: candidates,
            index,
        })
    }

    pub fn is_board_member(&self, id: &AccountId) -> bool {
        self.index.contains(id)
    }

    /// Members in construction order
    pub fn members(&self) -> &[AccountId] {
        &self.members
    }

    /// Number of seats, which is also the approval threshold
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Seat number of a member (construction order)
    pub fn position(&self, id: &AccountId) -> Option<usize> {
        self.members.iter().position(|m| m == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(n: usize) -> Vec<AccountId> {
        (0..n)
            .map(|i| AccountId::new(format!("MEMBER{i}")).unwrap())
            .collect()
    }

    #[test]
    fn test_registers_all_members_in_order() {
        let registry = BoardRegistry::new(DEFAULT_BOARD_SIZE, candidates(20)).unwrap();

        assert_eq!(registry.size(), DEFAULT_BOARD_SIZE);
        assert_eq!(registry.members(), candidates(20).as_slice());
        for member in candidates(20) {
            assert!(registry.is_board_member(&member));
        }
        assert_eq!(
            registry.position(&AccountId::new("MEMBER7").unwrap()),
            Some(7)
        );
    }

    #[test]
    fn test_outsider_is_not_member() {
        let registry = BoardRegistry::new(3, candidates(3)).unwrap();
        let outsider = AccountId::new("RECIPIENT").unwrap();

        assert!(!registry.is_board_member(&outsider));
        assert_eq!(registry.position(&outsider), None);
    }

    #[test]
    fn test_rejects_too_few_members() {
        let result = BoardRegistry::new(20, candidates(19));
        assert_eq!(
            result.unwrap_err(),
            BoardError::InvalidBoardSize {
                expected: 20,
                actual: 19
            }
        );
    }

    #[test]
    fn test_rejects_too_many_members() {
        let result = BoardRegistry::new(20, candidates(21));
        assert!(matches!(
            result,
            Err(BoardError::InvalidBoardSize { actual: 21, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_board() {
        let result = BoardRegistry::new(0, Vec::new());
        assert!(matches!(result, Err(BoardError::InvalidBoardSize { .. })));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut list = candidates(2);
        list.push(AccountId::new("member0").unwrap());

        let result = BoardRegistry::new(3, list);
        assert_eq!(
            result.unwrap_err(),
            BoardError::DuplicateMember("MEMBER0".to_string())
        );
    }
}
