//! Collects comparator-tagged conditions into a single range clause

use crate::assembler::AssembleError;
use crate::condition::{Condition, Mode};
use crate::query::range::RangeClause;


#[derive(Debug)]
pub struct RangeAccumulator {
    range: Option<RangeClause>,
}


impl RangeAccumulator {
    pub fn new() -> RangeAccumulator {
        RangeAccumulator {
            range: None,
        }
    }

    /// Applies one bound. The first condition fixes the field; a later bound for the same
    /// comparator replaces the earlier one.
    pub fn apply(&mut self, condition: &Condition) -> Result<(), AssembleError> {
        let comparator = match condition.mode() {
            Mode::Comparator(comparator) => comparator,
            mode => return Err(AssembleError::InvalidComparator(mode)),
        };

        let range = self.range.get_or_insert_with(|| RangeClause::new(condition.field()));
        if range.field() != condition.field() {
            return Err(AssembleError::FieldMismatch {
                expected: range.field().to_owned(),
                found: condition.field().to_owned(),
            });
        }

        range.set_bound(comparator, condition.value().clone());
        Ok(())
    }

    pub fn finish(self) -> Result<RangeClause, AssembleError> {
        self.range.ok_or(AssembleError::EmptyConditionList)
    }
}


impl Default for RangeAccumulator {
    fn default() -> RangeAccumulator {
        RangeAccumulator::new()
    }
}


/// Folds a list of bound conditions for one field into its range clause
pub fn accumulate(conditions: &[Condition]) -> Result<RangeClause, AssembleError> {
    let mut accumulator = RangeAccumulator::new();

    for condition in conditions.iter() {
        accumulator.apply(condition)?;
    }

    accumulator.finish()
}
