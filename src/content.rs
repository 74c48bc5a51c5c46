//! Static portfolio content: profile, experiences, projects, canned replies.

pub const NAME: &str = "Aditya Kumar";
pub const TAGLINE: &str = "AI Engineer & Full Stack Developer based in Singapore";
pub const CONTACT_EMAIL: &str = "adityakuma0308@gmail.com";

pub const ABOUT: &str = "I am a final year student at the Singapore University of \
Technology and Design (SUTD) specializing in Design and Artificial Intelligence. \
Passionate about developing AI systems and creating user-centric applications. \
Experienced in machine learning, full-stack development, and UI/UX design.";

/// Rotating greeting for the header, advanced on a timer tick.
pub const GREETINGS: &[&str] = &[
    "Hi",
    "Hola",
    "Bonjour",
    "Hallo",
    "Ciao",
    "नमस्ते",
    "こんにちは",
    "안녕하세요",
    "你好",
];

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub is_current: bool,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Undergraduate Researcher (UROP)",
        company: "Singapore University of Technology and Design",
        location: "Singapore",
        period: "May 2024 - Present",
        is_current: true,
    },
    Experience {
        title: "AI/Full Stack Intern",
        company: "CPF Board",
        location: "Singapore",
        period: "Sep 2023 - Dec 2023",
        is_current: false,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    /// Opaque style token: card accent in dark mode.
    pub accent: (u8, u8, u8),
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Mr. Weather App",
        description: "Interactive weather app with voice input, real-time weather \
data, and humorous responses. Built with React Native and Flask API.",
        link: "https://github.com/adikuma/Weather-App",
        accent: (0x93, 0xc5, 0xfd),
    },
    Project {
        title: "Penny Expense Tracker",
        description: "Expense tracking app using the Donut model to extract data \
from receipts with MongoDB storage. Includes scalable backend.",
        link: "https://github.com/adikuma/Penny-App",
        accent: (0xd8, 0xb4, 0xfe),
    },
    Project {
        title: "Clause Genie",
        description: "Generative AI tool for legal contract interpretation using \
GPT, TF-IDF, and PyPDF2 for automated reviews.",
        link: "https://github.com/adikuma/Clause-Genie",
        accent: (0xf9, 0xa8, 0xd4),
    },
    Project {
        title: "Moodify Music Recommender",
        description: "Music recommendation system using Conv1D with Attention for \
mood-based music predictions.",
        link: "https://github.com/adikuma/Moodify-Recommender",
        accent: (0xfd, 0xba, 0x74),
    },
    Project {
        title: "AI-Driven Urban Planning Platform",
        description: "Platform for public engagement in urban planning, converting \
community feedback into design insights using clustering.",
        link: "https://github.com/weetimo/spatialworld",
        accent: (0x86, 0xef, 0xac),
    },
    Project {
        title: "Skin Lesion Classification System",
        description: "Classification system for skin cancer detection using Capsule \
Networks, with Grad-CAM for interpretability.",
        link: "https://github.com/adikuma/Skin-Lesion-Classification",
        accent: (0xfd, 0xe0, 0x47),
    },
];

/// How many projects are featured before "show more" in the wide layout.
pub const FEATURED_PROJECTS: usize = 3;

/// Suggested prompts shown while the transcript is empty.
pub const SUGGESTIONS: &[&str] = &[
    "What projects have you worked on at SUTD?",
    "Who is your girlfriend?",
    "How did you get into AI and development?",
    "What are your hobbies outside of tech?",
    "Are you open to work opportunities?",
];

/// Canned reply per exact prompt. Lookup is case- and whitespace-sensitive.
const CANNED_REPLIES: &[(&str, &str)] = &[
    (
        "What projects have you worked on at SUTD?",
        "I've worked on various projects including AI-driven applications and \
full-stack development. Let me know if you'd like more details!",
    ),
    (
        "Who is your girlfriend?",
        "That's a bit personal, but I appreciate the interest! Her name starts \
with an M :)",
    ),
    (
        "How did you get into AI and development?",
        "When I was younger, I was fascinated by the autocomplete feature and the \
magic filter that enhanced images on the first iPhone my dad got. It felt like \
magic and made me fall in love with AI. Now, I'm also passionate about building \
applications because I want to create something useful and impactful.",
    ),
    (
        "What are your hobbies outside of tech?",
        "I enjoy playing basketball, exploring new places, making music and \
constantly trying to learn new things.",
    ),
    (
        "Are you open to work opportunities?",
        "Yes, I'm currently looking for a full-time position in Singapore!",
    ),
];

pub const FALLBACK_REPLY: &str = "Sorry, this feature is still not done yet.";

/// Resolve a prompt to its canned reply, or the fallback for anything else.
pub fn reply_for(prompt: &str) -> &'static str {
    CANNED_REPLIES
        .iter()
        .find(|(k, _)| *k == prompt)
        .map(|(_, v)| *v)
        .unwrap_or(FALLBACK_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_lookup_is_exact() {
        assert_eq!(
            reply_for("Who is your girlfriend?"),
            "That's a bit personal, but I appreciate the interest! Her name starts \
with an M :)"
        );
        assert_eq!(
            reply_for("Are you open to work opportunities?"),
            "Yes, I'm currently looking for a full-time position in Singapore!"
        );
    }

    #[test]
    fn unknown_prompts_fall_back() {
        assert_eq!(reply_for("asdf"), FALLBACK_REPLY);
        // Near-misses do not match: lookup is case- and whitespace-sensitive.
        assert_eq!(reply_for("who is your girlfriend?"), FALLBACK_REPLY);
        assert_eq!(reply_for(" Who is your girlfriend?"), FALLBACK_REPLY);
    }

    #[test]
    fn every_suggestion_has_a_canned_reply() {
        for s in SUGGESTIONS {
            assert_ne!(reply_for(s), FALLBACK_REPLY, "missing reply for {s:?}");
        }
    }
}
