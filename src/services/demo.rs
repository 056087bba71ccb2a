use crate::models::NewParticipant;

const DEMO_USERS: &[(&str, &str, &str, &str, &str)] = &[
    ("Alice Johnson", "alice@example.com", "React,JavaScript,UI/UX Design", "3 years frontend development", "https://github.com/alice"),
    ("Bob Smith", "bob@example.com", "Python,Machine Learning,Data Science", "5 years ML engineer", "https://github.com/bob"),
    ("Carol Davis", "carol@example.com", "Node.js,APIs,Backend Development", "4 years backend development", "https://github.com/carol"),
    ("David Wilson", "david@example.com", "React Native,Mobile Development,iOS", "2 years mobile developer", "https://github.com/david"),
    ("Eva Brown", "eva@example.com", "Solidity,Web3,Blockchain", "3 years blockchain developer", "https://github.com/eva"),
    ("Frank Miller", "frank@example.com", "Python,Django,PostgreSQL", "6 years full-stack developer", "https://github.com/frank"),
    ("Grace Lee", "grace@example.com", "UI/UX Design,Figma,User Research", "4 years UX designer", "https://github.com/grace"),
    ("Henry Taylor", "henry@example.com", "DevOps,AWS,Docker,Kubernetes", "5 years DevOps engineer", "https://github.com/henry"),
    ("Ivy Chen", "ivy@example.com", "Data Science,Analytics,Visualization", "3 years data scientist", "https://github.com/ivy"),
    ("Jack Robinson", "jack@example.com", "Security,Penetration Testing,Cybersecurity", "4 years security specialist", "https://github.com/jack"),
];

/// Demo roster used to seed the store
pub fn demo_participants() -> Vec<NewParticipant> {
    DEMO_USERS
        .iter()
        .map(|(name, email, skills, experience, github)| NewParticipant {
            name: name.to_string(),
            email: email.to_string(),
            skills: skills.to_string(),
            experience: Some(experience.to_string()),
            github: Some(github.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_roster() {
        let users = demo_participants();
        assert_eq!(users.len(), 10);
        let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), 10);
        assert!(users.iter().all(|u| !u.skills.is_empty()));
    }
}
