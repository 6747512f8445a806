pub mod charset;
pub mod glossary;
pub mod loader;
pub mod processor;
pub mod tokenizer;

pub use charset::{CharClass, DEFAULT_PARTICLES, DEFAULT_PUNCTUATION};
pub use glossary::{Glossary, GlossaryEntry};
pub use loader::GlossaryLoader;
pub use processor::JapaneseProcessor;
pub use tokenizer::{JapaneseTokenizer, ScriptRules, tokenize};
