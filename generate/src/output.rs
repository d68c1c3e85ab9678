use std::fmt;

pub struct Output(String);

impl Output {
    pub fn new() -> Self {
        Output(String::new())
    }

    pub fn write_fmt(&mut self, arguments: fmt::Arguments) {
        fmt::Write::write_fmt(&mut self.0, arguments).unwrap();
    }

    pub fn words(&mut self, words: &[u32; 8]) {
        for line in words.chunks(4) {
            self.0.push_str("   ");
            for word in line {
                self.write_fmt(format_args!(" 0x{:08X},", word));
            }
            self.0.push('\n');
        }
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
