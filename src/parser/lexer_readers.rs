// Распознаватели отдельных семейств токенов
//
// Каждый распознаватель либо потребляет распознанный участок целиком, либо
// оставляет позицию нетронутой. Неудача отдельного распознавателя не является
// ошибкой: управление переходит к следующему по порядку.

impl Lexer {
    /// Читает хинт оптимизатора: `--+ ...` до конца строки или `/*+ ... */`
    ///
    /// Хинты проверяются раньше обычных комментариев, так как разделяют с ними
    /// префикс. Внутренний текст сохраняется дословно для будущего планировщика.
    fn read_hint(&mut self) -> LexResult<Option<Token>> {
        if self.starts_with("--+") {
            let start = self.current_position.clone();
            self.advance_by(3);
            let value = self.read_to_line_end();
            return Ok(Some(Token::text(TokenKind::Hint, value, start)));
        }

        if self.starts_with("/*+") {
            let start = self.current_position.clone();
            self.advance_by(3);
            let value = self.read_block_comment_body()?;
            return Ok(Some(Token::text(TokenKind::Hint, value, start)));
        }

        Ok(None)
    }

    /// Проверяет, начинается ли на текущей позиции обычный комментарий
    fn comment_ahead(&self) -> bool {
        self.starts_with("--") || self.starts_with("//") || self.starts_with("/*")
    }

    /// Читает обычный комментарий: `--`, `//` до конца строки или `/* ... */`
    ///
    /// По умолчанию комментарий отбрасывается; при включенном сохранении
    /// выдается токен Comment с внутренним текстом.
    fn read_comment(&mut self) -> LexResult<Option<Token>> {
        let start = self.current_position.clone();

        let value = if self.starts_with("/*") {
            self.advance_by(2);
            self.read_block_comment_body()?
        } else {
            // "--" или "//"
            self.advance_by(2);
            self.read_to_line_end()
        };

        if self.settings.retain_comments {
            Ok(Some(Token::text(TokenKind::Comment, value, start)))
        } else {
            Ok(None)
        }
    }

    /// Читает содержимое до конца строки, не включая перенос
    fn read_to_line_end(&mut self) -> String {
        let mut value = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            value.push(self.advance());
        }
        value
    }

    /// Читает тело блочного комментария после открывающего маркера
    ///
    /// Счетчик вложенности увеличивается на каждом `/*` и уменьшается на `*/`;
    /// комментарий закрыт, только когда счетчик вернулся к нулю.
    fn read_block_comment_body(&mut self) -> LexResult<String> {
        let mut depth = 1usize;
        let mut value = String::new();

        loop {
            match self.peek() {
                None => return Err(LexError::UnclosedComment),
                Some('/') if self.peek_ahead(1) == Some('*') => {
                    depth += 1;
                    value.push(self.advance());
                    value.push(self.advance());
                }
                Some('*') if self.peek_ahead(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return Ok(value);
                    }
                    value.push('*');
                    value.push('/');
                }
                Some(_) => value.push(self.advance()),
            }
        }
    }

    /// Читает строку в долларовых маркерах: `$tag$ ... $tag$`
    ///
    /// Открывающий и закрывающий маркеры должны совпадать посимвольно; пустой
    /// тег (`$$ ... $$`) допустим. Содержимое сохраняется дословно, включая
    /// переносы строк и несовпадающие пары `$...$`.
    fn read_dollar_string(&mut self) -> LexResult<Option<Token>> {
        if self.peek() != Some('$') {
            return Ok(None);
        }

        // Проверяем форму открывающего маркера, не сдвигая позицию:
        // доллар, символы тега, доллар
        let mut tag = String::new();
        let mut len = 1;
        loop {
            match self.peek_ahead(len) {
                Some('$') => {
                    len += 1;
                    break;
                }
                Some(ch) if Self::is_dollar_tag_char(ch) => {
                    tag.push(ch);
                    len += 1;
                }
                // не открывающий маркер — одиночный $ может начинать идентификатор
                _ => return Ok(None),
            }
        }

        let start = self.current_position.clone();
        self.advance_by(len);

        let closing = format!("${}$", tag);
        let mut value = String::new();

        loop {
            if self.position >= self.input.len() {
                return Err(LexError::UnclosedQuote);
            }
            if self.peek() == Some('$') && self.starts_with(&closing) {
                self.advance_by(closing.chars().count());
                return Ok(Some(Token::text(TokenKind::StringLiteral, value, start)));
            }
            value.push(self.advance());
        }
    }

    /// Допустимый символ тега долларовой строки
    fn is_dollar_tag_char(ch: char) -> bool {
        ch != '$' && ch != '-' && !ch.is_whitespace() && !ch.is_control()
    }

    /// Читает q-строку: `q'<разделитель> ... <разделитель>'`
    ///
    /// Для `[ { ( <` закрывающим служит зеркальный символ, иначе — тот же.
    /// Содержимое идет без экранирования до разделителя, за которым сразу
    /// следует одинарная кавычка. Если закрытие не найдено, префикс `q'` не
    /// потребляется и `q` достается распознавателю идентификаторов.
    fn read_q_string(&mut self) -> Option<Token> {
        match self.peek() {
            Some('q') | Some('Q') => {}
            _ => return None,
        }
        if self.peek_ahead(1) != Some('\'') {
            return None;
        }
        let opener = self.peek_ahead(2)?;
        let closer = match opener {
            '[' => ']',
            '{' => '}',
            '(' => ')',
            '<' => '>',
            ch => ch,
        };

        // Ищем закрытие, не сдвигая позицию: мягкий откат при неудаче
        let mut end = 3;
        loop {
            match self.peek_ahead(end) {
                None => return None,
                Some(ch) if ch == closer && self.peek_ahead(end + 1) == Some('\'') => break,
                Some(_) => end += 1,
            }
        }

        let start = self.current_position.clone();
        self.advance_by(3);
        let mut value = String::new();
        for _ in 3..end {
            value.push(self.advance());
        }
        self.advance_by(2);

        Some(Token::text(TokenKind::StringLiteral, value, start))
    }

    /// Читает строковый литерал в одинарных кавычках
    ///
    /// Поддерживаются обратные экранирования `\\`, `\n`, `\r`, `\t`, `\'`;
    /// удвоенная одинарная кавычка как литерал НЕ поддерживается. Неизвестное
    /// экранирование оставляет сам символ, отбрасывая обратный слеш.
    fn read_single_quote_string(&mut self) -> LexResult<Option<Token>> {
        if self.peek() != Some('\'') {
            return Ok(None);
        }

        let start = self.current_position.clone();
        self.advance();
        let mut value = String::new();

        loop {
            match self.peek() {
                None => return Err(LexError::UnclosedQuote),
                Some('\'') => {
                    self.advance();
                    return Ok(Some(Token::text(TokenKind::StringLiteral, value, start)));
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        None => return Err(LexError::UnclosedQuote),
                        Some('n') => {
                            self.advance();
                            value.push('\n');
                        }
                        Some('r') => {
                            self.advance();
                            value.push('\r');
                        }
                        Some('t') => {
                            self.advance();
                            value.push('\t');
                        }
                        Some(_) => value.push(self.advance()),
                    }
                }
                Some(_) => value.push(self.advance()),
            }
        }
    }

    /// Читает идентификатор в двойных кавычках: `"..."`
    ///
    /// Содержимое сохраняет регистр; вложенная двойная кавычка и перенос
    /// строки запрещены. Перенос до закрытия — отказ распознавателя (двойная
    /// кавычка не входит в пунктуацию, сканирование завершится InvalidText);
    /// конец текста — незакрытая кавычка.
    fn read_double_quote_identifier(&mut self) -> LexResult<Option<Token>> {
        self.read_delimited_identifier('"', '"')
    }

    /// Читает идентификатор в квадратных скобках: `[...]`
    ///
    /// Те же правила, что и для двойных кавычек; дополнительно запрещена
    /// вложенная открывающая скобка.
    fn read_bracket_identifier(&mut self) -> LexResult<Option<Token>> {
        self.read_delimited_identifier('[', ']')
    }

    fn read_delimited_identifier(&mut self, opener: char, closer: char) -> LexResult<Option<Token>> {
        if self.peek() != Some(opener) {
            return Ok(None);
        }

        // Однострочность проверяется до потребления
        let mut end = 1;
        loop {
            match self.peek_ahead(end) {
                None => return Err(LexError::UnclosedQuote),
                Some(ch) if ch == closer => break,
                Some('\n') | Some('\r') => return Ok(None),
                Some(ch) if ch == opener => return Ok(None),
                Some(_) => end += 1,
            }
        }

        let start = self.current_position.clone();
        self.advance();
        let mut value = String::new();
        for _ in 1..end {
            value.push(self.advance());
        }
        self.advance();

        Ok(Some(Token::text(TokenKind::Identifier, value, start)))
    }

    /// Читает back-tick строку: содержимое без экранирования до следующего back-tick
    fn read_backtick_string(&mut self) -> LexResult<Option<Token>> {
        if self.peek() != Some('`') {
            return Ok(None);
        }

        let start = self.current_position.clone();
        self.advance();
        let mut value = String::new();

        loop {
            match self.peek() {
                None => return Err(LexError::UnclosedQuote),
                Some('`') => {
                    self.advance();
                    return Ok(Some(Token::text(TokenKind::StringLiteral, value, start)));
                }
                Some(_) => value.push(self.advance()),
            }
        }
    }

    /// Читает числовой литерал произвольной точности
    ///
    /// Форма: знак или цифра в начале, далее цифры, одна десятичная точка,
    /// показатель `e`/`E` с необязательным знаком. Литерал `inf` совпадает по
    /// форме, но десятичное значение произвольной точности не имеет
    /// бесконечности, поэтому разбор отклонит его и управление перейдет к
    /// распознавателю идентификаторов. Любая неудача разбора — отказ без
    /// потребления текста.
    fn read_number(&mut self) -> Option<Token> {
        let mut end = 0;
        match self.peek()? {
            '+' | '-' => end = 1,
            '0'..='9' | 'i' | 'I' => {}
            _ => return None,
        }

        if self.matches_ignore_case(end, "inf") {
            end += 3;
        } else {
            let digits_start = end;
            while matches!(self.peek_ahead(end), Some('0'..='9')) {
                end += 1;
            }
            if end == digits_start {
                return None;
            }

            // одна десятичная точка, только если за ней идет цифра
            if self.peek_ahead(end) == Some('.')
                && matches!(self.peek_ahead(end + 1), Some('0'..='9'))
            {
                end += 1;
                while matches!(self.peek_ahead(end), Some('0'..='9')) {
                    end += 1;
                }
            }

            // показатель с необязательным знаком
            if matches!(self.peek_ahead(end), Some('e') | Some('E')) {
                let mut exp = end + 1;
                if matches!(self.peek_ahead(exp), Some('+') | Some('-')) {
                    exp += 1;
                }
                if matches!(self.peek_ahead(exp), Some('0'..='9')) {
                    end = exp;
                    while matches!(self.peek_ahead(end), Some('0'..='9')) {
                        end += 1;
                    }
                }
            }
        }

        let text: String = self.input[self.position..self.position + end].iter().collect();
        let value = BigDecimal::from_str(&text).ok()?;

        let start = self.current_position.clone();
        self.advance_by(end);
        Some(Token::number(value, start))
    }

    /// Читает идентификатор или ключевое слово
    ///
    /// Начинается с буквы, `$` или расширенного Unicode символа; продолжается
    /// теми же символами, цифрами и `_`. Значение приводится к верхнему
    /// регистру — сопоставление ключевых слов ниже по конвейеру всегда идет
    /// по верхнему регистру.
    fn read_identifier(&mut self) -> Option<Token> {
        if !Self::is_identifier_start(self.peek()?) {
            return None;
        }

        let start = self.current_position.clone();
        let mut value = String::new();
        value.push(self.advance());

        while let Some(ch) = self.peek() {
            if Self::is_identifier_part(ch) {
                value.push(self.advance());
            } else {
                break;
            }
        }

        Some(Token::text(TokenKind::Identifier, value.to_uppercase(), start))
    }

    fn is_identifier_start(ch: char) -> bool {
        ch == '$' || ch.is_ascii_alphabetic() || ('\u{0080}'..='\u{FFEE}').contains(&ch)
    }

    fn is_identifier_part(ch: char) -> bool {
        Self::is_identifier_start(ch) || ch.is_ascii_digit() || ch == '_'
    }

    /// Читает одиночный символ пунктуации из фиксированного списка
    fn read_punctuation(&mut self) -> Option<Token> {
        let ch = self.peek()?;
        if !PUNCTUATION_CHARS.contains(&ch) {
            return None;
        }

        let start = self.current_position.clone();
        self.advance();
        Some(Token::text(TokenKind::Punctuation, ch.to_string(), start))
    }
}
