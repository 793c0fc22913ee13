use crate::commands::error::{CommandResult, InternalError};
use crate::commands::value::Value;
use crate::player::{Player, World};
use std::any::Any;
use std::time::Duration;

/// Parsed argument values of one dispatch, in slot order. Omitted optional
/// slots are `None`.
#[derive(Debug, Clone)]
pub struct ArgumentSet {
    args: Vec<Option<Value>>,
}

impl ArgumentSet {
    pub(super) fn new(args: Vec<Option<Value>>) -> Self {
        Self { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn is_present(&self, index: usize) -> bool {
        matches!(self.args.get(index), Some(Some(_)))
    }

    pub fn get(&self, index: usize) -> CommandResult<Option<&Value>> {
        match self.args.get(index) {
            Some(value) => Ok(value.as_ref()),
            None => Err(InternalError::MissingArgument { index }.into()),
        }
    }

    fn optional<'a, T>(
        &'a self,
        index: usize,
        expected: &str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> CommandResult<Option<T>> {
        let Some(value) = self.get(index)? else {
            return Ok(None);
        };
        match convert(value) {
            Some(converted) => Ok(Some(converted)),
            None => Err(InternalError::WrongArgumentType {
                index,
                expected: format!("{} (got {})", expected, value.kind()),
            }
            .into()),
        }
    }

    fn required<'a, T>(
        &'a self,
        index: usize,
        expected: &str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> CommandResult<T> {
        self.optional(index, expected, convert)?
            .ok_or_else(|| InternalError::MissingArgument { index }.into())
    }

    pub fn players(&self, index: usize) -> CommandResult<Vec<Player>> {
        self.required(index, "Players", |v| v.as_players().map(<[Player]>::to_vec))
    }

    pub fn optional_players(&self, index: usize) -> CommandResult<Option<Vec<Player>>> {
        self.optional(index, "Players", |v| v.as_players().map(<[Player]>::to_vec))
    }

    pub fn world(&self, index: usize) -> CommandResult<World> {
        self.required(index, "World", |v| v.as_world().cloned())
    }

    pub fn optional_world(&self, index: usize) -> CommandResult<Option<World>> {
        self.optional(index, "World", |v| v.as_world().cloned())
    }

    pub fn boolean(&self, index: usize) -> CommandResult<bool> {
        self.required(index, "Boolean", Value::as_boolean)
    }

    pub fn optional_boolean(&self, index: usize) -> CommandResult<Option<bool>> {
        self.optional(index, "Boolean", Value::as_boolean)
    }

    pub fn duration(&self, index: usize) -> CommandResult<Duration> {
        self.required(index, "Duration", Value::as_duration)
    }

    pub fn optional_duration(&self, index: usize) -> CommandResult<Option<Duration>> {
        self.optional(index, "Duration", Value::as_duration)
    }

    pub fn number(&self, index: usize) -> CommandResult<f64> {
        self.required(index, "Number", Value::as_number)
    }

    pub fn optional_number(&self, index: usize) -> CommandResult<Option<f64>> {
        self.optional(index, "Number", Value::as_number)
    }

    pub fn coordinate(&self, index: usize) -> CommandResult<f64> {
        self.required(index, "Coordinate", Value::as_coordinate)
    }

    pub fn optional_coordinate(&self, index: usize) -> CommandResult<Option<f64>> {
        self.optional(index, "Coordinate", Value::as_coordinate)
    }

    pub fn string(&self, index: usize) -> CommandResult<String> {
        self.required(index, "String", |v| v.as_string().map(str::to_string))
    }

    pub fn optional_string(&self, index: usize) -> CommandResult<Option<String>> {
        self.optional(index, "String", |v| v.as_string().map(str::to_string))
    }

    pub fn integer(&self, index: usize) -> CommandResult<i32> {
        self.required(index, "Integer", Value::as_integer)
    }

    pub fn optional_integer(&self, index: usize) -> CommandResult<Option<i32>> {
        self.optional(index, "Integer", Value::as_integer)
    }

    pub fn custom<T: Any>(&self, index: usize) -> CommandResult<&T> {
        self.required(index, std::any::type_name::<T>(), Value::as_custom::<T>)
    }

    pub fn optional_custom<T: Any>(&self, index: usize) -> CommandResult<Option<&T>> {
        self.optional(index, std::any::type_name::<T>(), Value::as_custom::<T>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::error::CommandError;

    #[test]
    fn absent_optional_slot() {
        let args = ArgumentSet::new(vec![Some(Value::Boolean(true)), None]);
        assert!(args.boolean(0).unwrap());
        assert!(args.is_present(0));
        assert!(!args.is_present(1));
        assert_eq!(args.optional_world(1).unwrap(), None);
        assert!(matches!(
            args.world(1),
            Err(CommandError::Internal(InternalError::MissingArgument { index: 1 }))
        ));
    }

    #[test]
    fn wrong_type_is_internal_error() {
        let args = ArgumentSet::new(vec![Some(Value::Number(1.5))]);
        assert!(matches!(
            args.string(0),
            Err(CommandError::Internal(InternalError::WrongArgumentType { index: 0, .. }))
        ));
        assert!(matches!(
            args.number(3),
            Err(CommandError::Internal(InternalError::MissingArgument { index: 3 }))
        ));
    }

    #[test]
    fn custom_values_downcast() {
        #[derive(Debug, PartialEq)]
        struct Color(u8, u8, u8);

        let args = ArgumentSet::new(vec![Some(Value::Custom(std::sync::Arc::new(Color(
            255, 0, 0,
        ))))]);
        assert_eq!(args.custom::<Color>(0).unwrap(), &Color(255, 0, 0));
        assert!(args.custom::<String>(0).is_err());
    }
}
