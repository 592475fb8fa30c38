use std::fmt::Display;

use fixedbitset::FixedBitSet;
use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Skill(String);

impl Skill {
    pub fn new(skill: impl Into<String>) -> Self {
        Skill(skill.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Skill {
    fn from(value: &str) -> Self {
        Skill::new(value)
    }
}

define_index_newtype!(SkillIdx, Skill);

/// Interns skill tokens into dense indices so that skill sets can be stored
/// as bitsets.
#[derive(Debug, Default, Clone)]
pub struct SkillRegistry {
    skills: Vec<Skill>,
    indices: FxHashMap<Skill, SkillIdx>,
}

impl SkillRegistry {
    pub fn intern(&mut self, skill: &Skill) -> SkillIdx {
        if let Some(&index) = self.indices.get(skill) {
            return index;
        }

        let index = SkillIdx::new(self.skills.len());
        self.skills.push(skill.clone());
        self.indices.insert(skill.clone(), index);
        index
    }

    pub fn skill(&self, index: SkillIdx) -> &Skill {
        &self.skills[index]
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Interns every skill of `skills` and returns them as a bitset. Sets
    /// built before later skills are interned are shorter, subset checks
    /// treat the missing bits as unset.
    pub fn skill_set<'a>(&mut self, skills: impl IntoIterator<Item = &'a Skill>) -> SkillSet {
        let indices = skills
            .into_iter()
            .map(|skill| self.intern(skill))
            .collect::<Vec<_>>();

        let mut bits = FixedBitSet::with_capacity(self.skills.len());
        for index in indices {
            bits.insert(index.get());
        }

        SkillSet(bits)
    }
}

/// Set of interned skills.
#[derive(Debug, Clone, Default)]
pub struct SkillSet(FixedBitSet);

impl SkillSet {
    pub fn contains(&self, skill: SkillIdx) -> bool {
        self.0.contains(skill.get())
    }

    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_clear()
    }

    pub fn len(&self) -> usize {
        self.0.count_ones(..)
    }

    /// Skills of `self` that `other` lacks.
    pub fn missing_from(&self, other: &SkillSet) -> Vec<SkillIdx> {
        self.0.difference(&other.0).map(SkillIdx::new).collect()
    }

    pub fn to_skills(&self, registry: &SkillRegistry) -> FxHashSet<Skill> {
        self.0
            .ones()
            .map(|index| registry.skill(SkillIdx::new(index)).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(tokens: &[&str]) -> Vec<Skill> {
        tokens.iter().map(|&token| Skill::from(token)).collect()
    }

    #[test]
    fn test_intern_is_stable() {
        let mut registry = SkillRegistry::default();
        let drill = registry.intern(&Skill::from("drill"));
        let saw = registry.intern(&Skill::from("saw"));

        assert_eq!(registry.intern(&Skill::from("drill")), drill);
        assert_ne!(drill, saw);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.skill(saw).as_str(), "saw");
    }

    #[test]
    fn test_subset_with_sets_of_different_lengths() {
        let mut registry = SkillRegistry::default();
        let required = registry.skill_set(&skills(&["drill"]));
        let possessed = registry.skill_set(&skills(&["saw", "crane", "drill"]));
        let nothing = registry.skill_set(std::iter::empty());

        assert!(required.is_subset(&possessed));
        assert!(!possessed.is_subset(&required));
        assert!(nothing.is_subset(&required));
        assert!(!required.is_subset(&nothing));
    }

    #[test]
    fn test_missing_from() {
        let mut registry = SkillRegistry::default();
        let required = registry.skill_set(&skills(&["drill", "saw"]));
        let possessed = registry.skill_set(&skills(&["saw"]));

        let missing = required
            .missing_from(&possessed)
            .into_iter()
            .map(|index| registry.skill(index).clone())
            .collect::<Vec<_>>();

        assert_eq!(missing, skills(&["drill"]));
    }

    #[test]
    fn test_to_skills_round_trip() {
        let mut registry = SkillRegistry::default();
        let input = skills(&["a", "b"]);
        let set = registry.skill_set(&input);

        assert_eq!(set.len(), 2);
        assert_eq!(set.to_skills(&registry), input.into_iter().collect());
    }
}
