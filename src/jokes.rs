use rand::seq::SliceRandom;

/// Filler shown while the model is writing.
pub const JOKES: [&str; 10] = [
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "Why did the developer go broke? Because he used up all his cache.",
    "How many programmers does it take to change a light bulb? None. It's a hardware problem.",
    "What is a programmer's favorite hangout place? Foo Bar.",
    "Why do Java developers wear glasses? Because they don't see sharp.",
    "A SQL query walks into a bar, walks up to two tables and asks... 'Can I join you?'",
    "Why was the JavaScript developer sad? Because he didn't know how to 'null' his feelings.",
    "What do you call a programmer from Finland? Nerdic.",
    "Why did the computer go to the doctor? Because it had a virus!",
    "There are 10 types of people in the world: those who understand binary, and those who don't.",
];

/// Picks one joke uniformly at random.
pub fn random_joke() -> &'static str {
    JOKES.choose(&mut rand::thread_rng()).copied().unwrap_or(JOKES[0])
}
