use super::{Character, CharacterId, Side};

/// The characters fielded by one side.
///
/// Members are appended during setup only. During battle the list itself is
/// read-only and only the characters change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    name: String,
    side: Side,
    members: Vec<Character>,
}

impl Team {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            members: Vec::new(),
        }
    }

    /// Adds a member, assigning it to this team's side.
    pub fn push(&mut self, mut character: Character) {
        character.set_side(self.side);
        self.members.push(character);
    }

    #[must_use]
    pub fn with_member(mut self, character: Character) -> Self {
        self.push(character);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.members.iter().find(|c| c.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.members.iter_mut().find(|c| c.id() == id)
    }

    pub fn index_of(&self, id: CharacterId) -> Option<usize> {
        self.members.iter().position(|c| c.id() == id)
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.index_of(id).is_some()
    }

    /// Alive members in team order.
    pub fn alive(&self) -> impl Iterator<Item = &Character> {
        self.members.iter().filter(|c| c.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// True when no member is alive.
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(|c| !c.is_alive())
    }

    /// First alive member in team order.
    pub fn first_alive(&self) -> Option<&Character> {
        self.alive().next()
    }

    /// Alive member with the lowest current hp; ties go to the earliest member.
    pub fn weakest_alive(&self) -> Option<&Character> {
        // min_by_key keeps the first minimum on ties.
        self.alive().min_by_key(|c| c.hp())
    }

    pub(crate) fn reset_turn_modifiers(&mut self) {
        for member in self.members.iter_mut().filter(|c| c.is_alive()) {
            member.reset_turn_modifiers();
        }
    }

    /// Borrows two distinct members mutably.
    pub(crate) fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Option<(&mut Character, &mut Character)> {
        if first == second || first >= self.members.len() || second >= self.members.len() {
            return None;
        }
        if first < second {
            let (left, right) = self.members.split_at_mut(second);
            Some((&mut left[first], &mut right[0]))
        } else {
            let (left, right) = self.members.split_at_mut(first);
            Some((&mut right[0], &mut left[second]))
        }
    }
}
