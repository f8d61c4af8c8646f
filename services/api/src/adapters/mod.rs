pub mod tts;

pub use tts::ElevenLabsTtsAdapter;
