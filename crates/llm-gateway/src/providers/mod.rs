mod groq;

pub use groq::GroqClient;
