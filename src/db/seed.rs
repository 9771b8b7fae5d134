use crate::models::{Fact, User};

#[must_use]
pub fn users() -> Vec<User> {
    vec![User::new(1, "hassan", "1122"), User::new(2, "tariq", "1122")]
}

#[must_use]
pub fn facts() -> Vec<Fact> {
    vec![
        Fact::new(1, "Tariq", "This a fake cat fact !"),
        Fact::new(2, "Hassan", "Another fake cat fact!!"),
        Fact::new(3, "Karim", "Cats like to swim 🌊"),
        Fact::new(
            4,
            "Ahmed",
            "Did you know that cats love playing with dolphines 🐬",
        ),
        Fact::new(5, "Sara", "Girls dont like cats 🗿"),
        Fact::new(6, "Hassan", "I am tired of comping up with those stupid facts"),
        Fact::new(7, "Tariq", "please like my website 🐸"),
    ]
}
