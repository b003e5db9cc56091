//! # Lexicon Tables
//!
//! File: cli/src/responder/lexicon.rs
//!
//! ## Overview
//!
//! Static, read-only content used by the response generators: problem-domain
//! records, learning resources and paths, dictionary entries, code examples,
//! tips, and jokes.
//!
//! Every table is an ordered slice rather than a map. Lookups that scan a
//! table ("first key contained in the input wins") depend on declaration
//! order, so the order below is part of the observable behavior.
//!

// ===============================
// Problem domains
// ===============================

/// What a problem domain knows about.
#[derive(Debug)]
pub enum DomainKnowledge {
    /// Named errors with explanations, matched by name against the problem text.
    Errors(&'static [(&'static str, &'static str)]),
    /// Issue keys with explanations. `heading` is the word placed after the key
    /// in the reply title ("CORS Error Solution", "connection Issue Solution").
    Issues {
        heading: &'static str,
        table: &'static [(&'static str, &'static str)],
    },
    /// A fixed tip list, returned whatever the problem text says.
    Tips {
        heading: &'static str,
        tips: &'static [&'static str],
    },
}

/// A problem-solving domain.
#[derive(Debug)]
pub struct DomainRecord {
    pub key: &'static str,
    pub category: &'static str,
    pub knowledge: DomainKnowledge,
}

pub static DOMAINS: &[DomainRecord] = &[
    DomainRecord {
        key: "python",
        category: "Python Programming",
        knowledge: DomainKnowledge::Errors(&[
            ("AttributeError", "This error occurs when trying to access an attribute that doesn't exist. Check if the object has that attribute or if you misspelled it."),
            ("TypeError", "This error means you're performing an operation on incompatible data types. Ensure types match (e.g., int + str)."),
            ("ValueError", "This error occurs when a function receives an argument of correct type but inappropriate value. Check your input values."),
            ("KeyError", "This error occurs when trying to access a dictionary key that doesn't exist. Use .get() method instead."),
            ("IndexError", "This error occurs when trying to access a list index that doesn't exist. Check your list length."),
            ("NameError", "This error occurs when using a variable that hasn't been defined. Define the variable first."),
        ]),
    },
    DomainRecord {
        key: "debugging",
        category: "Debugging Techniques",
        knowledge: DomainKnowledge::Tips {
            heading: "Debugging Tips",
            tips: &[
                "Use print() statements to track variable values",
                "Use debugger: import pdb; pdb.set_trace()",
                "Check for typos in variable names",
                "Verify data types are correct",
                "Test functions with different inputs",
                "Use try-except blocks for error handling",
            ],
        },
    },
    DomainRecord {
        key: "performance",
        category: "Performance Optimization",
        knowledge: DomainKnowledge::Tips {
            heading: "Performance Optimization Tips",
            tips: &[
                "Use list comprehensions instead of loops",
                "Use set for O(1) lookup instead of list",
                "Avoid nested loops when possible",
                "Cache results with functools.lru_cache",
                "Use generators for large datasets",
                "Profile code with cProfile module",
            ],
        },
    },
    DomainRecord {
        key: "web",
        category: "Web Development Issues",
        knowledge: DomainKnowledge::Issues {
            heading: "Error",
            table: &[
                ("CORS", "Cross-Origin Resource Sharing error. Add CORS headers or use Flask-CORS."),
                ("404", "Resource not found. Check URL path and API endpoint."),
                ("500", "Server error. Check server logs for details."),
                ("timeout", "Request timeout. Increase timeout duration or optimize code."),
            ],
        },
    },
    DomainRecord {
        key: "database",
        category: "Database Issues",
        knowledge: DomainKnowledge::Issues {
            heading: "Issue",
            table: &[
                ("connection", "Can't connect to database. Check credentials, host, and port."),
                ("syntax", "SQL syntax error. Check your SQL query for typos."),
                ("constraint", "Constraint violation. Check unique/foreign key constraints."),
                ("transaction", "Transaction error. Use ROLLBACK and retry."),
            ],
        },
    },
];

/// Keywords used to infer a domain when the caller does not name one.
pub static DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("python", &["python", "error", "code", "script", "function"]),
    ("debugging", &["debug", "bug", "fix", "wrong", "issue"]),
    ("performance", &["slow", "fast", "optimize", "performance"]),
    ("web", &["api", "web", "cors", "http", "request"]),
    ("database", &["database", "sql", "data", "query"]),
];

/// Domain used when no keyword matches.
pub const DEFAULT_DOMAIN: &str = "python";

pub fn find_domain(key: &str) -> Option<&'static DomainRecord> {
    DOMAINS.iter().find(|record| record.key == key)
}

pub static CODE_EXAMPLES: &[(&str, &str)] = &[
    (
        "list_comprehension",
        "numbers = [1, 2, 3, 4, 5]\nsquared = [x**2 for x in numbers]\nprint(squared)",
    ),
    (
        "try_except",
        "try:\n    value = int('abc')\nexcept ValueError:\n    print('Invalid input')",
    ),
    ("lambda", "square = lambda x: x ** 2\nprint(square(5))"),
    (
        "decorator",
        "def my_decorator(func):\n    def wrapper(*args, **kwargs):\n        print(f'Calling {func.__name__}')\n        return func(*args, **kwargs)\n    return wrapper",
    ),
];

// ===============================
// Learning
// ===============================

/// A learning resource (course outline).
#[derive(Debug)]
pub struct Resource {
    pub key: &'static str,
    pub title: &'static str,
    pub topics: &'static [&'static str],
    pub difficulty: &'static str,
    pub duration: &'static str,
}

pub static RESOURCES: &[Resource] = &[
    Resource {
        key: "python_basics",
        title: "Python Basics",
        topics: &["variables", "data types", "operators", "conditionals", "loops"],
        difficulty: "Beginner",
        duration: "2-3 hours",
    },
    Resource {
        key: "functions",
        title: "Functions and Scope",
        topics: &["function definition", "parameters", "return values", "scope", "lambda"],
        difficulty: "Beginner",
        duration: "2 hours",
    },
    Resource {
        key: "data_structures",
        title: "Data Structures",
        topics: &["lists", "tuples", "dictionaries", "sets", "comprehensions"],
        difficulty: "Intermediate",
        duration: "3 hours",
    },
    Resource {
        key: "oop",
        title: "Object-Oriented Programming",
        topics: &["classes", "objects", "inheritance", "polymorphism", "encapsulation"],
        difficulty: "Intermediate",
        duration: "4 hours",
    },
    Resource {
        key: "error_handling",
        title: "Error Handling and Debugging",
        topics: &["try-except", "custom exceptions", "debugging", "logging"],
        difficulty: "Intermediate",
        duration: "2.5 hours",
    },
    Resource {
        key: "file_io",
        title: "File I/O and JSON",
        topics: &["reading files", "writing files", "JSON", "CSV", "serialization"],
        difficulty: "Beginner",
        duration: "2 hours",
    },
    Resource {
        key: "apis",
        title: "Working with APIs",
        topics: &["HTTP requests", "REST", "API design", "requests library", "response handling"],
        difficulty: "Intermediate",
        duration: "3 hours",
    },
    Resource {
        key: "databases",
        title: "Databases and SQL",
        topics: &["SQL basics", "CRUD operations", "relationships", "joins", "indexing"],
        difficulty: "Intermediate",
        duration: "4 hours",
    },
];

pub fn find_resource(key: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|resource| resource.key == key)
}

/// An ordered course list for a learning goal.
#[derive(Debug)]
pub struct LearningPath {
    pub goal: &'static str,
    pub resources: &'static [&'static str],
}

pub static LEARNING_PATHS: &[LearningPath] = &[
    LearningPath {
        goal: "web development",
        resources: &["python_basics", "functions", "data_structures", "apis", "databases"],
    },
    LearningPath {
        goal: "data science",
        resources: &["python_basics", "data_structures", "error_handling", "file_io"],
    },
    LearningPath {
        goal: "backend",
        resources: &["python_basics", "oop", "apis", "databases", "error_handling"],
    },
    LearningPath {
        goal: "automation",
        resources: &["python_basics", "functions", "file_io", "error_handling"],
    },
];

pub static LEARNING_TIPS: &[&str] = &[
    "Practice coding every day, even if just for 15 minutes",
    "Build projects to apply what you've learned",
    "Read other people's code to improve your understanding",
    "Join coding communities and participate in discussions",
    "Use version control (Git) from the start",
    "Write clean, readable code with comments",
    "Test your code thoroughly before deployment",
    "Don't just watch tutorials - write code along with them",
    "Solve coding challenges and problems regularly",
    "Teach others what you've learned",
];

// ===============================
// Dictionary
// ===============================

pub static DICTIONARY: &[(&str, &str)] = &[
    ("python", "A high-level programming language known for its simplicity."),
    ("algorithm", "A step-by-step procedure for solving a problem."),
    ("variable", "A named location in memory that stores a value."),
    ("function", "A reusable block of code that performs a specific task."),
    ("loop", "A control structure that repeats a block of code."),
    ("data", "Information or facts collected for analysis."),
    ("database", "An organized collection of structured data."),
    ("api", "Application Programming Interface - a way for software to communicate."),
    ("bug", "An error or flaw in a program."),
    ("debug", "The process of finding and fixing errors in code."),
    ("array", "A collection of elements stored in a single variable."),
    ("dictionary", "A collection of key-value pairs."),
    ("string", "A sequence of characters."),
    ("integer", "A whole number without decimal points."),
    ("boolean", "A data type with only two values: True or False."),
    ("cloud", "Remote servers accessed over the internet."),
    ("server", "A computer that provides resources or services to other computers."),
    ("client", "A computer or software that requests services from a server."),
    ("cache", "Fast storage used to reduce access time to data."),
    ("encryption", "The process of converting data into a code to prevent unauthorized access."),
];

// ===============================
// Bot-level lists
// ===============================

/// Jokes told by the simple chatbot.
pub static SIMPLE_JOKES: &[&str] = &[
    "Why did the programmer quit his job? Because he didn't get arrays!",
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem!",
    "Why did Python go to the gym? To get more fit!",
    "What do you call a programmer from Finland? Nerdic!",
    "Why do Java developers wear glasses? Because they don't C#!",
    "How many MySQL developers does it take to change a light bulb? None, that's a database problem!",
    "What's the object-oriented way to become wealthy? Inheritance!",
];

/// Prompts offered by `GET /api/suggestions`.
pub static SUGGESTIONS: &[&str] = &[
    "Help with Python errors",
    "Analyze my code",
    "Learning resources for web development",
    "Show me a code example",
    "Debugging tips",
    "Performance optimization",
    "Tell me about your features",
];

/// Features listed by `GET /api/chatbot-info`.
pub static API_FEATURES: &[&str] = &[
    "Problem solving (Python, Debugging, Performance, Web, Database)",
    "Code analysis and feedback",
    "Learning resources and tutorials",
    "Code examples and best practices",
    "Performance optimization tips",
    "Error diagnosis and solutions",
];

/// Features listed when a user asks the chatbot about its features.
pub static CHAT_FEATURES: &[&str] = &[
    "Real-time problem solving",
    "Code analysis",
    "Learning resources",
    "Error detection",
    "Performance suggestions",
];
