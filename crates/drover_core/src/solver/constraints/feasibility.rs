use std::fmt::Display;

use serde::Serialize;

use crate::problem::skill::Skill;

/// Why a hard constraint rejected an insertion or a route.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Infeasibility {
    CapacityExceeded {
        dimension: usize,
        load: i64,
        capacity: i64,
    },
    SkillMismatch {
        missing: Vec<Skill>,
    },
    MaximumJobsExceeded {
        maximum: usize,
    },
}

impl Display for Infeasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Infeasibility::CapacityExceeded {
                dimension,
                load,
                capacity,
            } => write!(
                f,
                "capacity exceeded in dimension {dimension}: load {load} > capacity {capacity}"
            ),
            Infeasibility::SkillMismatch { missing } => {
                write!(f, "vehicle lacks required skills: ")?;
                for (index, skill) in missing.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{skill}")?;
                }
                Ok(())
            }
            Infeasibility::MaximumJobsExceeded { maximum } => {
                write!(f, "route would exceed the maximum of {maximum} jobs")
            }
        }
    }
}

/// Verdict of a feasibility check. Infeasibility is an expected outcome and
/// is returned as data.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    Feasible,
    Infeasible(Infeasibility),
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible)
    }

    pub fn reason(&self) -> Option<&Infeasibility> {
        match self {
            Feasibility::Feasible => None,
            Feasibility::Infeasible(reason) => Some(reason),
        }
    }
}

impl From<Option<Infeasibility>> for Feasibility {
    fn from(value: Option<Infeasibility>) -> Self {
        value.map_or(Feasibility::Feasible, Feasibility::Infeasible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reasons() {
        let reason = Infeasibility::SkillMismatch {
            missing: vec![Skill::from("drill"), Skill::from("saw")],
        };
        assert_eq!(reason.to_string(), "vehicle lacks required skills: drill, saw");

        let reason = Infeasibility::CapacityExceeded {
            dimension: 0,
            load: 3,
            capacity: 2,
        };
        assert_eq!(
            reason.to_string(),
            "capacity exceeded in dimension 0: load 3 > capacity 2"
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Feasibility::from(None::<Infeasibility>), Feasibility::Feasible);

        let verdict = Feasibility::from(Some(Infeasibility::MaximumJobsExceeded { maximum: 1 }));
        assert!(!verdict.is_feasible());
        assert_eq!(
            verdict.reason(),
            Some(&Infeasibility::MaximumJobsExceeded { maximum: 1 })
        );
    }
}
