// Цикл сканирования и вспомогательные методы лексического анализатора

impl Lexer {
    /// Возвращает все токены из входного текста
    ///
    /// Один проход без возвратов; любая лексическая ошибка терминальна,
    /// частичная последовательность токенов не возвращается.
    pub fn tokenize(mut self) -> LexResult<Tokens> {
        let mut tokens = Tokens::new();

        loop {
            self.skip_whitespace();

            if self.position >= self.input.len() {
                break;
            }

            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }

        log::trace!("lexer produced {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Пробует распознаватели в фиксированном порядке на текущей позиции
    ///
    /// Ok(None) означает, что участок текста потреблен без выдачи токена
    /// (отброшенный комментарий). Err — ни один распознаватель не подошел
    /// либо конструкция не закрыта до конца текста.
    fn scan_token(&mut self) -> LexResult<Option<Token>> {
        if let Some(token) = self.read_hint()? {
            return Ok(Some(token));
        }
        if self.comment_ahead() {
            return self.read_comment();
        }
        if let Some(token) = self.read_dollar_string()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_q_string() {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_single_quote_string()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_double_quote_identifier()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_bracket_identifier()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_backtick_string()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_number() {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_identifier() {
            return Ok(Some(token));
        }
        if let Some(token) = self.read_punctuation() {
            return Ok(Some(token));
        }

        Err(LexError::invalid_text(&self.rest_preview()))
    }

    // === Вспомогательные методы ===

    /// Возвращает текущий символ и продвигает позицию
    fn advance(&mut self) -> char {
        if self.position >= self.input.len() {
            return '\0';
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += 1;

        ch
    }

    /// Продвигает позицию на несколько символов
    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Возвращает следующий символ без продвижения позиции
    fn peek(&self) -> Option<char> {
        self.peek_ahead(0)
    }

    /// Возвращает символ на определенном расстоянии от текущей позиции
    fn peek_ahead(&self, offset: usize) -> Option<char> {
        let pos = self.position + offset;
        if pos >= self.input.len() {
            None
        } else {
            Some(self.input[pos])
        }
    }

    /// Проверяет, начинается ли оставшийся текст с указанной строки
    fn starts_with(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(i, ch)| self.peek_ahead(i) == Some(ch))
    }

    /// Проверяет без учета регистра строку на указанном расстоянии от позиции
    fn matches_ignore_case(&self, offset: usize, text: &str) -> bool {
        text.chars().enumerate().all(|(i, ch)| {
            self.peek_ahead(offset + i)
                .map(|c| c.eq_ignore_ascii_case(&ch))
                .unwrap_or(false)
        })
    }

    /// Пропускает пробельные символы
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Возвращает ограниченный фрагмент нераспознанного текста для диагностики
    fn rest_preview(&self) -> String {
        self.input[self.position..]
            .iter()
            .take(crate::common::error::INVALID_TEXT_PREVIEW_LEN)
            .collect()
    }
}
