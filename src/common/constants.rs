//! Константы для ferrumdb

/// Максимальное количество значащих десятичных цифр в числовом литерале
pub const MAX_NUMBER_DIGITS: usize = 64_000;

/// Максимальная длина текстового поля (varchar/char) в символах
pub const MAX_TEXT_LENGTH: usize = 64_000;

/// Размер страницы данных в байтах
pub const PAGE_SIZE: usize = 8192;

/// Порт сервера по умолчанию
pub const DEFAULT_SERVER_PORT: u16 = 9422;

/// Допустимое время простоя сессии по умолчанию (в секундах)
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;

/// Символы пунктуации, распознаваемые лексером как отдельные токены
pub const PUNCTUATION_CHARS: &[char] = &[
    '(', ')', '+', '-', '*', '/', '=', '<', '>', '&', '^', '%', '#', '@', '!', '~', '|', '\\',
    ':', ';', ',', '.',
];
