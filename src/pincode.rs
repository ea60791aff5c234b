// File: ./src/pincode.rs
// Clock-in keypad buffer.

pub const DEFAULT_PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitPress {
    /// Still collecting; carries how many digits are entered now.
    Pending(usize),
    /// The buffer reached the required length. It has been emptied and the
    /// full sequence is handed over.
    Completed(Vec<char>),
    /// Not a decimal digit; the buffer is unchanged.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct PincodeInput {
    required: usize,
    entered: Vec<char>,
}

impl Default for PincodeInput {
    fn default() -> Self {
        Self::new(DEFAULT_PIN_LENGTH)
    }
}

impl PincodeInput {
    /// `required` is clamped to at least one digit.
    pub fn new(required: usize) -> Self {
        let required = required.max(1);
        Self {
            required,
            entered: Vec::with_capacity(required),
        }
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn entered(&self) -> &[char] {
        &self.entered
    }

    pub fn len(&self) -> usize {
        self.entered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }

    pub fn press_digit(&mut self, digit: char) -> DigitPress {
        if !digit.is_ascii_digit() {
            return DigitPress::Ignored;
        }
        self.entered.push(digit);
        if self.entered.len() < self.required {
            DigitPress::Pending(self.entered.len())
        } else {
            log::info!("pincode entered ({} digits)", self.required);
            DigitPress::Completed(std::mem::take(&mut self.entered))
        }
    }

    pub fn press_clear(&mut self) {
        self.entered.clear();
    }

    /// One flag per required digit, true where a digit has been entered.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.required).map(|i| i < self.entered.len())
    }
}
