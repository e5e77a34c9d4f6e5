//! The project input form: three text buffers plus focus and cursor.

use crate::domain::{validate, DomainError, DomainResult, Validatable};

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 100;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::People];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::People => "People",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }
}

/// Validated, trimmed form contents ready to hand to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
    pub focus: FormField,
    /// Byte offset into the focused buffer, always on a char boundary
    pub cursor_position: usize,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            focus: FormField::Title,
            cursor_position: 0,
        }
    }
}

impl ProjectForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    /// Moves focus to `field` and puts the cursor at the end of its text.
    pub fn focus_field(&mut self, field: FormField) {
        self.focus = field;
        self.cursor_position = self.value(field).len();
    }

    pub fn focus_next(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.focus_field(self.focus.previous());
    }

    pub fn insert_char(&mut self, c: char) {
        let pos = self.cursor_position;
        self.focused_mut().insert(pos, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let pos = self.cursor_position;
        let buffer = self.focused_mut();
        let previous = buffer[..pos].char_indices().next_back().map(|(idx, _)| idx);
        if let Some(idx) = previous {
            buffer.remove(idx);
            self.cursor_position = idx;
        }
    }

    pub fn delete(&mut self) {
        let pos = self.cursor_position;
        let buffer = self.focused_mut();
        if pos < buffer.len() {
            buffer.remove(pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        let pos = self.cursor_position;
        let previous = self.value(self.focus)[..pos].char_indices().next_back().map(|(idx, _)| idx);
        if let Some(idx) = previous {
            self.cursor_position = idx;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let pos = self.cursor_position;
        let next = self.value(self.focus)[pos..].chars().next().map(char::len_utf8);
        if let Some(width) = next {
            self.cursor_position += width;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.value(self.focus).len();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trims and validates all three fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first field that fails its rules.
    pub fn gather(&self) -> DomainResult<ProjectDraft> {
        let title = self.title.trim();
        let description = self.description.trim();
        let people_text = self.people.trim();

        let title_rule = Validatable::text(title)
            .required()
            .min_length(TITLE_MIN_LEN)
            .max_length(TITLE_MAX_LEN);
        if !validate(&title_rule) {
            return Err(DomainError::InvalidInput {
                field: "title",
                reason: format!("must be {}-{} characters", TITLE_MIN_LEN, TITLE_MAX_LEN),
            });
        }

        let description_rule = Validatable::text(description).max_length(DESCRIPTION_MAX_LEN);
        if !validate(&description_rule) {
            return Err(DomainError::InvalidInput {
                field: "description",
                reason: format!("must be at most {} characters", DESCRIPTION_MAX_LEN),
            });
        }

        let people_range = || DomainError::InvalidInput {
            field: "people",
            reason: format!("must be a number from {} to {}", PEOPLE_MIN, PEOPLE_MAX),
        };
        let people = people_text.parse::<i64>().map_err(|_| people_range())?;
        let people_rule = Validatable::number(people)
            .required()
            .min_value(PEOPLE_MIN)
            .max_value(PEOPLE_MAX);
        if !validate(&people_rule) {
            return Err(people_range());
        }
        let people = u32::try_from(people).map_err(|_| people_range())?;

        Ok(ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            people,
        })
    }
}
