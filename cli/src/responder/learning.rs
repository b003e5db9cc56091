//! # Learning Resources
//!
//! File: cli/src/responder/learning.rs
//!
//! ## Overview
//!
//! Renders the course outlines and learning paths held in `lexicon`.
//!
//! - `resource`: topic → key (lowercase, spaces to underscores), exact match
//! - `path`: first goal key contained in the goal, or containing the goal
//! - `list_all`: every resource, topics cut to the first three
//! - `tips`: numbered study tips
//!
use super::lexicon::{self, Resource};
use super::problem::title_case;

/// Number of topics shown per resource in `list_all`.
const LISTED_TOPICS: usize = 3;

#[derive(Debug, Clone)]
pub struct LearningResources {
    bot_name: String,
}

impl LearningResources {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
        }
    }

    pub fn resource(&self, topic: &str) -> String {
        let key = topic.to_lowercase().replace(' ', "_");
        match lexicon::find_resource(&key) {
            Some(resource) => format_resource(resource),
            None => format!(
                "Sorry, I don't have a resource for '{}'. Available resources: {}",
                topic,
                resource_keys().join(", ")
            ),
        }
    }

    pub fn list_all(&self) -> String {
        let mut report = format!("**{} - Available Learning Resources**\n\n", self.bot_name);
        for resource in lexicon::RESOURCES {
            let shown: Vec<&str> = resource.topics.iter().take(LISTED_TOPICS).copied().collect();
            report.push_str(&format!(
                "📚 **{}** ({})\n",
                resource.title, resource.difficulty
            ));
            report.push_str(&format!("   ⏱️ {}\n", resource.duration));
            report.push_str(&format!("   Topics: {}...\n\n", shown.join(", ")));
        }
        report
    }

    /// # Learning Path (`path`)
    ///
    /// An empty goal is contained in every key, so it selects the first path.
    pub fn path(&self, goal: &str) -> String {
        let goal_lower = goal.to_lowercase();
        let found = lexicon::LEARNING_PATHS
            .iter()
            .find(|path| goal_lower.contains(path.goal) || path.goal.contains(goal_lower.as_str()));

        let Some(path) = found else {
            let goals: Vec<&str> = lexicon::LEARNING_PATHS.iter().map(|p| p.goal).collect();
            return format!(
                "I don't have a learning path for '{}'. Try: {}",
                goal,
                goals.join(", ")
            );
        };

        let mut report = format!(
            "**{} - Learning Path for {}**\n\n",
            self.bot_name,
            title_case(path.goal)
        );
        let courses = path.resources.iter().filter_map(|key| lexicon::find_resource(key));
        for (number, course) in courses.enumerate() {
            report.push_str(&format!(
                "{}. **{}** ({})\n",
                number + 1,
                course.title,
                course.duration
            ));
        }
        report
    }

    pub fn tips(&self) -> String {
        let mut report = format!("**{} - Tips for Effective Learning**\n\n", self.bot_name);
        for (number, tip) in lexicon::LEARNING_TIPS.iter().enumerate() {
            report.push_str(&format!("{}. {}\n", number + 1, tip));
        }
        report
    }
}

fn resource_keys() -> Vec<&'static str> {
    lexicon::RESOURCES.iter().map(|resource| resource.key).collect()
}

fn format_resource(resource: &Resource) -> String {
    format!(
        "**{title}**\n📚 Topics: {topics}\n🎓 Difficulty: {difficulty}\n⏱️ Duration: {duration}\n\nThis course covers all essential concepts you need to master {lower}.",
        title = resource.title,
        topics = resource.topics.join(", "),
        difficulty = resource.difficulty,
        duration = resource.duration,
        lower = resource.title.to_lowercase(),
    )
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn learning() -> LearningResources {
        LearningResources::new("Codepal")
    }

    #[test]
    fn test_resource_topic_is_normalized_to_a_key() {
        let reply = learning().resource("Python Basics");
        assert!(reply.starts_with("**Python Basics**\n📚 Topics: variables, data types"));
        assert!(reply.contains("🎓 Difficulty: Beginner"));
        assert!(reply.ends_with("you need to master python basics."));
    }

    #[test]
    fn test_unknown_resource_lists_keys() {
        assert_eq!(
            learning().resource("unknown topic"),
            "Sorry, I don't have a resource for 'unknown topic'. Available resources: python_basics, functions, data_structures, oop, error_handling, file_io, apis, databases"
        );
    }

    #[test]
    fn test_list_all_truncates_topics() {
        let listing = learning().list_all();
        assert!(listing.starts_with("**Codepal - Available Learning Resources**\n\n"));
        assert!(listing.contains("📚 **Python Basics** (Beginner)\n   ⏱️ 2-3 hours\n   Topics: variables, data types, operators...\n"));
        assert!(!listing.contains("conditionals"));
        assert_eq!(listing.matches("📚").count(), lexicon::RESOURCES.len());
    }

    #[test]
    fn test_path_matches_in_either_direction() {
        let reply = learning().path("I want to get into Web Development");
        assert_eq!(
            reply,
            "**Codepal - Learning Path for Web Development**\n\n\
             1. **Python Basics** (2-3 hours)\n\
             2. **Functions and Scope** (2 hours)\n\
             3. **Data Structures** (3 hours)\n\
             4. **Working with APIs** (3 hours)\n\
             5. **Databases and SQL** (4 hours)\n"
        );
        // Goal contained in a key.
        assert!(learning().path("auto").contains("Learning Path for Automation"));
        // Empty goal selects the first path.
        assert!(learning().path("").contains("Learning Path for Web Development"));
    }

    #[test]
    fn test_unknown_path_lists_goals() {
        assert_eq!(
            learning().path("gardening"),
            "I don't have a learning path for 'gardening'. Try: web development, data science, backend, automation"
        );
    }

    #[test]
    fn test_tips_are_numbered() {
        let tips = learning().tips();
        assert!(tips.contains("1. Practice coding every day"));
        assert!(tips.ends_with("10. Teach others what you've learned\n"));
    }
}
