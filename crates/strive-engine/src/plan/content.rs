//! Static lesson and category tables.
//!
//! Lesson bodies are looked up by key; any key without a record gets
//! [`default_content`].

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::Topic;
use super::gamification::difficulty_stars;

/// What a lesson teaches and how it is practised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    pub learning_goal: String,
    pub key_concepts: Vec<String>,
    pub exercises: Vec<String>,
    pub resources: Vec<String>,
}

/// A single lesson inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Minutes.
    pub duration: u32,
    /// 1 (beginner) to 5 (expert).
    pub difficulty: u8,
    pub xp: u32,
    pub content: LessonContent,
}

/// A themed group of lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    /// CSS colour used by front ends for the category accent.
    pub color: String,
    pub lessons: Vec<Lesson>,
}

impl Category {
    /// Mean lesson difficulty, or 0 for an empty category.
    pub fn average_difficulty(&self) -> f64 {
        if self.lessons.is_empty() {
            return 0.0;
        }
        let total: u32 = self.lessons.iter().map(|l| u32::from(l.difficulty)).sum();
        f64::from(total) / self.lessons.len() as f64
    }
}

impl Lesson {
    /// Lesson page with the goal, concepts, exercises and resources.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let c = &self.content;

        writeln!(md, "# {}", self.title).unwrap();
        writeln!(md, "{}", self.description).unwrap();
        writeln!(
            md,
            "**{} min** | {} | **+{} XP**",
            self.duration,
            difficulty_stars(f64::from(self.difficulty)),
            self.xp
        )
        .unwrap();
        writeln!(md).unwrap();
        writeln!(md, "## 🎯 Learning Goal").unwrap();
        writeln!(md, "{}", c.learning_goal).unwrap();
        writeln!(md).unwrap();
        writeln!(md, "## 🔑 Key Concepts").unwrap();
        for concept in &c.key_concepts {
            writeln!(md, "- {concept}").unwrap();
        }
        writeln!(md).unwrap();
        writeln!(md, "## ✍️ Exercises").unwrap();
        for (n, exercise) in c.exercises.iter().enumerate() {
            writeln!(md, "{}. {exercise}", n + 1).unwrap();
        }
        writeln!(md).unwrap();
        writeln!(md, "## 📖 Resources").unwrap();
        for resource in &c.resources {
            writeln!(md, "- {resource}").unwrap();
        }

        md
    }
}

/// Finds a lesson by id along with the category holding it.
pub fn find_lesson<'a>(
    categories: &'a [Category],
    lesson_id: &str,
) -> Option<(&'a Category, &'a Lesson)> {
    categories.iter().find_map(|category| {
        category
            .lessons
            .iter()
            .find(|lesson| lesson.id == lesson_id)
            .map(|lesson| (category, lesson))
    })
}

struct ContentRecord {
    key: &'static str,
    learning_goal: &'static str,
    key_concepts: &'static [&'static str],
    exercises: &'static [&'static str],
    resources: &'static [&'static str],
}

impl ContentRecord {
    fn to_content(&self) -> LessonContent {
        LessonContent {
            learning_goal: self.learning_goal.to_string(),
            key_concepts: owned(self.key_concepts),
            exercises: owned(self.exercises),
            resources: owned(self.resources),
        }
    }
}

struct LessonTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: u32,
    difficulty: u8,
    xp: u32,
    content_key: &'static str,
}

struct CategoryTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
    lessons: &'static [LessonTemplate],
}

impl CategoryTemplate {
    fn to_category(&self) -> Category {
        Category {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            color: self.color.to_string(),
            lessons: self
                .lessons
                .iter()
                .map(|l| Lesson {
                    id: l.id.to_string(),
                    title: l.title.to_string(),
                    description: l.description.to_string(),
                    duration: l.duration,
                    difficulty: l.difficulty,
                    xp: l.xp,
                    content: lesson_content(l.content_key),
                })
                .collect(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const CONTENT: &[ContentRecord] = &[
    ContentRecord {
        key: "python-setup",
        learning_goal: "Set up Python development environment and write your first program",
        key_concepts: &[
            "Installing Python 3",
            "Choosing an IDE (VS Code, PyCharm)",
            "Python syntax basics",
            "Running Python scripts",
        ],
        exercises: &[
            "Install Python and verify installation",
            "Write and run \"Hello, World!\" program",
            "Explore Python interactive shell",
            "Set up your preferred IDE",
        ],
        resources: &[
            "Python official documentation",
            "VS Code Python extension",
            "Python interactive tutorial",
        ],
    },
    ContentRecord {
        key: "python-variables",
        learning_goal: "Understand Python variables and basic data types",
        key_concepts: &[
            "Variable naming conventions",
            "String creation and manipulation",
            "Numeric types (int, float)",
            "Boolean values and operations",
        ],
        exercises: &[
            "Create variables of different types",
            "String concatenation and formatting",
            "Mathematical operations",
            "Type conversion exercises",
        ],
        resources: &[
            "Python data types documentation",
            "String methods reference",
            "Mathematical operators guide",
        ],
    },
    ContentRecord {
        key: "python-io",
        learning_goal: "Handle user input and create formatted output",
        key_concepts: &[
            "input() function usage",
            "print() function formatting",
            "String formatting methods",
            "Error handling basics",
        ],
        exercises: &[
            "Create interactive programs",
            "Format output with f-strings",
            "Handle different input types",
            "Build a simple calculator",
        ],
        resources: &[
            "Python input/output guide",
            "String formatting documentation",
            "Error handling basics",
        ],
    },
    ContentRecord {
        key: "python-conditions",
        learning_goal: "Use conditional statements to control program flow",
        key_concepts: &[
            "if, elif, else statements",
            "Comparison operators",
            "Logical operators (and, or, not)",
            "Nested conditionals",
        ],
        exercises: &[
            "Create age verification program",
            "Build a grade calculator",
            "Implement password checker",
            "Create weather recommendation system",
        ],
        resources: &[
            "Python conditional statements",
            "Logical operators reference",
            "Nested conditions examples",
        ],
    },
    ContentRecord {
        key: "python-for-loops",
        learning_goal: "Use for loops to iterate through data structures",
        key_concepts: &[
            "for loop syntax",
            "range() function",
            "Iterating through strings and lists",
            "enumerate() function",
        ],
        exercises: &[
            "Count characters in a string",
            "Sum numbers in a list",
            "Find maximum value",
            "Create multiplication table",
        ],
        resources: &[
            "Python for loops guide",
            "range() function documentation",
            "Iteration patterns examples",
        ],
    },
    ContentRecord {
        key: "python-while-loops",
        learning_goal: "Use while loops and control statements effectively",
        key_concepts: &[
            "while loop syntax",
            "break and continue statements",
            "Loop conditions",
            "Infinite loop prevention",
        ],
        exercises: &[
            "Create number guessing game",
            "Build menu system",
            "Implement retry logic",
            "Create counter with exit condition",
        ],
        resources: &[
            "Python while loops",
            "Loop control statements",
            "Common loop patterns",
        ],
    },
    ContentRecord {
        key: "python-lists",
        learning_goal: "Create and manipulate lists effectively",
        key_concepts: &[
            "List creation and indexing",
            "List methods (append, remove, sort)",
            "List slicing and manipulation",
            "Nested lists",
        ],
        exercises: &[
            "Create shopping list manager",
            "Sort and filter data",
            "Implement stack operations",
            "Build student grade tracker",
        ],
        resources: &[
            "Python lists documentation",
            "List methods reference",
            "List manipulation examples",
        ],
    },
    ContentRecord {
        key: "python-dictionaries",
        learning_goal: "Use dictionaries to store and retrieve data",
        key_concepts: &[
            "Dictionary creation and access",
            "Dictionary methods",
            "Key-value operations",
            "Nested dictionaries",
        ],
        exercises: &[
            "Create contact book",
            "Build word frequency counter",
            "Implement user profile system",
            "Create inventory tracker",
        ],
        resources: &[
            "Python dictionaries guide",
            "Dictionary methods reference",
            "Key-value patterns",
        ],
    },
    ContentRecord {
        key: "python-functions",
        learning_goal: "Create and use functions to organize code",
        key_concepts: &[
            "Function definition with def",
            "Parameters and arguments",
            "Return statements",
            "Function scope",
        ],
        exercises: &[
            "Create calculator functions",
            "Build text processing utilities",
            "Implement validation functions",
            "Create helper functions",
        ],
        resources: &[
            "Python functions guide",
            "Function parameters documentation",
            "Scope and lifetime concepts",
        ],
    },
    ContentRecord {
        key: "python-advanced-functions",
        learning_goal: "Use advanced function features effectively",
        key_concepts: &[
            "Default parameters",
            "Keyword arguments",
            "Variable-length arguments",
            "Lambda functions",
        ],
        exercises: &[
            "Create flexible functions",
            "Implement function decorators",
            "Build higher-order functions",
            "Use lambda functions",
        ],
        resources: &[
            "Advanced function features",
            "Lambda functions guide",
            "Function decorators",
        ],
    },
    ContentRecord {
        key: "js-basics",
        learning_goal: "Understand JavaScript syntax and variable declaration",
        key_concepts: &[
            "JavaScript syntax basics",
            "var, let, const declarations",
            "Data types in JavaScript",
            "Type coercion and conversion",
        ],
        exercises: &[
            "Create variables with different types",
            "Practice type conversion",
            "Use console output for debugging",
            "Experiment with JavaScript in browser",
        ],
        resources: &[
            "MDN JavaScript guide",
            "JavaScript variables documentation",
            "Type conversion reference",
        ],
    },
    ContentRecord {
        key: "design-color",
        learning_goal: "Apply color theory to create effective designs",
        key_concepts: &[
            "Color wheel and relationships",
            "Color psychology and meaning",
            "Color harmony and contrast",
            "Accessibility in color choice",
        ],
        exercises: &[
            "Create color palettes",
            "Design mood boards",
            "Practice color combinations",
            "Test color accessibility",
        ],
        resources: &[
            "Color theory fundamentals",
            "Color psychology guide",
            "Accessibility color tools",
        ],
    },
];

const PYTHON: &[CategoryTemplate] = &[
    CategoryTemplate {
        id: "python-basics",
        title: "🐍 Python Fundamentals",
        description: "Master the basics of Python programming",
        color: "#3776ab",
        lessons: &[
            LessonTemplate {
                id: "lesson-1",
                title: "Setting Up Python Environment",
                description: "Install Python, set up your IDE, and write your first program",
                duration: 20,
                difficulty: 1,
                xp: 25,
                content_key: "python-setup",
            },
            LessonTemplate {
                id: "lesson-2",
                title: "Variables and Data Types",
                description: "Learn about Python variables, strings, numbers, and booleans",
                duration: 25,
                difficulty: 1,
                xp: 30,
                content_key: "python-variables",
            },
            LessonTemplate {
                id: "lesson-3",
                title: "Input and Output",
                description: "Get user input and display formatted output",
                duration: 20,
                difficulty: 1,
                xp: 25,
                content_key: "python-io",
            },
        ],
    },
    CategoryTemplate {
        id: "control-flow",
        title: "🔄 Control Flow",
        description: "Master conditional statements and loops",
        color: "#ff6b35",
        lessons: &[
            LessonTemplate {
                id: "lesson-4",
                title: "If Statements and Conditions",
                description: "Learn conditional logic and decision making",
                duration: 30,
                difficulty: 2,
                xp: 35,
                content_key: "python-conditions",
            },
            LessonTemplate {
                id: "lesson-5",
                title: "For Loops and Iteration",
                description: "Master for loops and iteration patterns",
                duration: 35,
                difficulty: 2,
                xp: 40,
                content_key: "python-for-loops",
            },
            LessonTemplate {
                id: "lesson-6",
                title: "While Loops and Control",
                description: "Learn while loops and loop control statements",
                duration: 30,
                difficulty: 2,
                xp: 35,
                content_key: "python-while-loops",
            },
        ],
    },
    CategoryTemplate {
        id: "data-structures",
        title: "📊 Data Structures",
        description: "Work with lists, dictionaries, and tuples",
        color: "#4ecdc4",
        lessons: &[
            LessonTemplate {
                id: "lesson-7",
                title: "Lists and List Methods",
                description: "Master Python lists and their methods",
                duration: 40,
                difficulty: 3,
                xp: 45,
                content_key: "python-lists",
            },
            LessonTemplate {
                id: "lesson-8",
                title: "Dictionaries and Key-Value Pairs",
                description: "Work with dictionaries for data storage",
                duration: 35,
                difficulty: 3,
                xp: 40,
                content_key: "python-dictionaries",
            },
        ],
    },
    CategoryTemplate {
        id: "functions",
        title: "⚙️ Functions",
        description: "Create reusable code with functions",
        color: "#45b7d1",
        lessons: &[
            LessonTemplate {
                id: "lesson-9",
                title: "Creating Your First Functions",
                description: "Learn function definition and usage",
                duration: 40,
                difficulty: 3,
                xp: 45,
                content_key: "python-functions",
            },
            LessonTemplate {
                id: "lesson-10",
                title: "Advanced Function Concepts",
                description: "Master advanced function features",
                duration: 45,
                difficulty: 4,
                xp: 50,
                content_key: "python-advanced-functions",
            },
        ],
    },
];

const JAVASCRIPT: &[CategoryTemplate] = &[CategoryTemplate {
    id: "js-basics",
    title: "⚡ JavaScript Fundamentals",
    description: "Master JavaScript basics and syntax",
    color: "#f7df1e",
    lessons: &[LessonTemplate {
        id: "lesson-1",
        title: "JavaScript Basics and Variables",
        description: "Learn JavaScript syntax, variables, and data types",
        duration: 25,
        difficulty: 1,
        xp: 30,
        content_key: "js-basics",
    }],
}];

const DESIGN: &[CategoryTemplate] = &[CategoryTemplate {
    id: "design-basics",
    title: "🎨 Design Fundamentals",
    description: "Learn design principles and theory",
    color: "#ff6b9d",
    lessons: &[LessonTemplate {
        id: "lesson-1",
        title: "Color Theory and Psychology",
        description: "Understand color relationships and emotional impact",
        duration: 30,
        difficulty: 2,
        xp: 35,
        content_key: "design-color",
    }],
}];

/// Looks up a lesson body by key, falling back to [`default_content`].
pub fn lesson_content(key: &str) -> LessonContent {
    CONTENT
        .iter()
        .find(|r| r.key == key)
        .map(ContentRecord::to_content)
        .unwrap_or_else(default_content)
}

/// Placeholder body for lessons without a table entry.
pub fn default_content() -> LessonContent {
    LessonContent {
        learning_goal: "Master key concepts in this lesson".to_string(),
        key_concepts: numbered("Key concept"),
        exercises: numbered("Exercise"),
        resources: numbered("Resource"),
    }
}

fn numbered(label: &str) -> Vec<String> {
    (1..=4).map(|n| format!("{label} {n}")).collect()
}

/// Categories for `topic`. Generic goals get a single introductory
/// category built around the goal text.
pub fn categories_for(topic: Topic, goal: &str) -> Vec<Category> {
    let templates = match topic {
        Topic::Python => PYTHON,
        Topic::JavaScript => JAVASCRIPT,
        Topic::Design => DESIGN,
        Topic::Generic => return vec![generic_category(goal)],
    };
    templates.iter().map(CategoryTemplate::to_category).collect()
}

fn generic_category(goal: &str) -> Category {
    Category {
        id: "basics".to_string(),
        title: "📚 Fundamentals".to_string(),
        description: format!("Learn the basics of {goal}"),
        color: "#8b5cf6".to_string(),
        lessons: vec![Lesson {
            id: "lesson-1".to_string(),
            title: format!("Introduction to {goal}"),
            description: format!("Get started with {goal}"),
            duration: 20,
            difficulty: 1,
            xp: 25,
            content: LessonContent {
                learning_goal: format!("Understand the fundamentals of {goal}"),
                key_concepts: owned(&[
                    "Basic concepts and terminology",
                    "Getting started guide",
                    "Essential tools and resources",
                    "Next steps for learning",
                ]),
                exercises: owned(&[
                    "Set up your learning environment",
                    "Practice basic concepts",
                    "Explore resources",
                    "Plan your learning path",
                ]),
                resources: owned(&[
                    "Official documentation",
                    "Beginner tutorials",
                    "Community resources",
                    "Practice exercises",
                ]),
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_lesson_has_a_content_record() {
        for templates in [PYTHON, JAVASCRIPT, DESIGN] {
            for category in templates {
                for lesson in category.lessons {
                    assert!(
                        CONTENT.iter().any(|r| r.key == lesson.content_key),
                        "missing content for {}",
                        lesson.content_key
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_key_gets_default() {
        assert_eq!(lesson_content("no-such-lesson"), default_content());
        assert_eq!(default_content().exercises[3], "Exercise 4");
    }

    #[test]
    fn python_has_ten_lessons_in_four_categories() {
        let categories = categories_for(Topic::Python, "learn python");
        assert_eq!(categories.len(), 4);
        let lessons: usize = categories.iter().map(|c| c.lessons.len()).sum();
        assert_eq!(lessons, 10);
        assert_eq!(
            categories[0].lessons[1].content.learning_goal,
            "Understand Python variables and basic data types"
        );
    }

    #[test]
    fn generic_category_mentions_goal() {
        let categories = categories_for(Topic::Generic, "woodworking");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].lessons[0].title, "Introduction to woodworking");
    }

    #[test]
    fn find_lesson_returns_its_category() {
        let categories = categories_for(Topic::Python, "python");
        let (category, lesson) = find_lesson(&categories, "lesson-7").unwrap();
        assert_eq!(category.id, "data-structures");
        assert_eq!(lesson.id, "lesson-7");
        assert!(find_lesson(&categories, "lesson-99").is_none());
    }

    #[test]
    fn lesson_markdown_shows_every_section() {
        let categories = categories_for(Topic::Generic, "woodworking");
        let md = categories[0].lessons[0].to_markdown();

        assert!(md.starts_with("# Introduction to woodworking\n"));
        assert!(md.contains("**20 min** | ⭐☆☆☆☆ | **+25 XP**"));
        assert!(md.contains("## 🎯 Learning Goal\nUnderstand the fundamentals of woodworking\n"));
        assert!(md.contains("- Basic concepts and terminology\n"));
        assert!(md.contains("1. Set up your learning environment\n"));
        assert!(md.ends_with("- Practice exercises\n"));

        let html = crate::render::render(&md);
        assert_eq!(html.matches("<ol>").count(), 1);
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn average_difficulty() {
        let categories = categories_for(Topic::Python, "python");
        // Functions: difficulties 3 and 4
        assert_eq!(categories[3].average_difficulty(), 3.5);
    }
}
