//! Наброски AST для SQL команд ferrumdb
//!
//! Скелетные типы команд и блоков запроса. Грамматика операторов будет
//! наращиваться по мере реализации парсера; лексер от этих типов не зависит.

/// Разобранная SQL команда
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlCommand {
    /// Запрос SELECT/WITH
    Query(Query),
}

/// Запрос как последовательность блоков, связанных операторами над множествами
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub blocks: Vec<QueryBlock>,
}

/// Оператор над множествами между блоками запроса
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetOperator {
    #[default]
    None,
    Union,
    UnionAll,
    Intersect,
    Minus,
}

/// Тип соединения таблиц
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinType {
    #[default]
    Inner,
    InnerCross,
    InnerNatural,
    OuterLeft,
    OuterRight,
    OuterFull,
}

/// Один блок запроса
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBlock {
    pub set_operator: SetOperator,
    pub from: Vec<FromClause>,
    pub select: Vec<SelectItem>,
}

/// Элемент списка FROM
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FromClause {
    pub join_type: JoinType,
    /// Имя таблицы или представления (в верхнем регистре, если без кавычек)
    pub table: String,
}

/// Элемент списка SELECT
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectItem {
    pub expression: String,
    pub alias: Option<String>,
}
