use crate::model::{Operation, MAX_OPERANDS, MIN_OPERANDS};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Ошибка: отсутствует значение для параметра {0}")]
    MissingFlagValue(String),

    #[error("Ошибка: '{0}' не является числом")]
    NotANumber(String),

    #[error("Ошибка: число '{0}' выходит за пределы диапазона")]
    OutOfRange(String),

    #[error("Ошибка: не указана операция")]
    MissingOperation,

    #[error("Ошибка: количество операндов должно быть от {min} до {max}", min = MIN_OPERANDS, max = MAX_OPERANDS)]
    InvalidOperandCount(usize),

    #[error("Ошибка: неизвестная операция '{0}'")]
    UnknownOperation(String),

    #[error("Ошибка при выполнении операции: переполнение целого числа ({0})")]
    Overflow(Operation),
}

pub type Result<T> = std::result::Result<T, CalcError>;
