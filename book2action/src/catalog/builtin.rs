//! Pre-authored plans for the books bundled with the application.

use crate::cover;
use crate::model::{ActionableStep, Book, WEEKDAYS};
use crate::normalize::backfill;

struct Entry {
    title: &'static str,
    author: &'static str,
    published_year: i32,
    genre: &'static str,
    isbn: &'static str,
    summary: &'static str,
    /// (step, chapter), Monday first
    plan: [(&'static str, &'static str); 7],
}

const ENTRIES: &[Entry] = &[
    Entry {
        title: "Atomic Habits",
        author: "James Clear",
        published_year: 2018,
        genre: "Self-Help",
        isbn: "9780735211292",
        summary: "Atomic Habits presents a revolutionary approach to habit formation based on the principle that small changes can yield remarkable results when compounded over time. James Clear argues that we often overestimate the importance of one defining moment and underestimate the value of making small improvements on a daily basis. The book introduces the concept that if you get one percent better each day for one year, you will end up thirty-seven times better by the time you are done, demonstrating the mathematical power of marginal gains in personal development.

The core framework of the book revolves around the Four Laws of Behavior Change: make it obvious, make it attractive, make it easy, and make it satisfying. Clear systematically breaks down how habits work at a neurological level, explaining the habit loop of cue, craving, response, and reward. He demonstrates how environmental design plays a crucial role in habit formation, showing that motivation is often overrated while environment and systems design are underrated factors in creating lasting behavioral change.

The practical applications extend beyond personal development to professional growth, relationships, and health, with Clear introducing powerful techniques such as habit stacking, the two-minute rule, and environment design strategies. The book provides numerous real-world examples and case studies, from how the British cycling team dominated international competition through marginal gains to how businesses and individuals have transformed their lives through systematic habit design.",
        plan: [
            (
                "Start with habits so small they seem almost ridiculous (2-minute rule)",
                "Chapter 11: Walk Slowly, but Never Backward",
            ),
            (
                "Stack new habits onto existing ones using habit stacking",
                "Chapter 5: The Best Way to Start a New Habit",
            ),
            (
                "Design your environment to make good habits obvious and bad habits invisible",
                "Chapter 6: Motivation Is Overrated; Environment Often Matters More",
            ),
            (
                "Track your habits daily using a simple habit tracker",
                "Chapter 16: How to Stick with Good Habits Every Day",
            ),
            (
                "Focus on identity-based habits: \"I am the type of person who...\"",
                "Chapter 2: How Your Habits Shape Your Identity",
            ),
            (
                "Use the two-day rule: never miss twice in a row",
                "Chapter 15: The Cardinal Rule of Behavior Change",
            ),
            (
                "Celebrate small wins immediately after completing a habit",
                "Chapter 15: The Cardinal Rule of Behavior Change",
            ),
        ],
    },
    Entry {
        title: "Think and Grow Rich",
        author: "Napoleon Hill",
        published_year: 1937,
        genre: "Personal Finance",
        isbn: "9781585424337",
        summary: "Think and Grow Rich emerged from Napoleon Hill's twenty-year study of over 500 successful individuals, including Andrew Carnegie, Henry Ford, and Thomas Edison. The book presents thirteen fundamental principles for achieving wealth and success, based on Hill's analysis of what separates those who accumulate wealth from those who struggle financially.

The book introduces concepts such as the \"Master Mind\" principle, which Hill defines as the coordination of knowledge and effort between two or more people working toward a definite purpose. He demonstrates how the most successful individuals surrounded themselves with advisors, mentors, and like-minded individuals who could provide specialized knowledge and support.

The lasting impact of Think and Grow Rich lies in its emphasis on personal responsibility and mental conditioning, with Hill arguing that circumstances do not make the person but rather reveal their character and mental attitude. The book provides a complete philosophy of personal achievement that extends beyond financial success to encompass happiness, health, and fulfillment.",
        plan: [
            (
                "Define your definite major purpose with specific financial goals",
                "Chapter 2: Desire",
            ),
            (
                "Develop burning desire by writing down exactly what you want",
                "Chapter 2: Desire",
            ),
            (
                "Build unwavering faith through auto-suggestion and visualization",
                "Chapter 3: Faith",
            ),
            (
                "Acquire specialized knowledge in your chosen field",
                "Chapter 5: Specialized Knowledge",
            ),
            (
                "Use your imagination to create detailed plans for achieving your goals",
                "Chapter 6: Imagination",
            ),
            (
                "Make quick, firm decisions and stick to them",
                "Chapter 8: Decision",
            ),
            (
                "Develop persistence by never giving up on your major purpose",
                "Chapter 9: Persistence",
            ),
        ],
    },
    Entry {
        title: "The 7 Habits of Highly Effective People",
        author: "Stephen R. Covey",
        published_year: 1989,
        genre: "Self-Help",
        isbn: "9781982137274",
        summary: "The 7 Habits of Highly Effective People presents a principle-centered approach to personal and professional effectiveness. Stephen Covey introduces a paradigm shift from the \"Personality Ethic\" that focuses on quick-fix techniques and manipulation tactics to the \"Character Ethic\" that emphasizes fundamental principles and character development.

The first three habits focus on achieving private victory and personal mastery: Be Proactive (taking responsibility for your choices), Begin with the End in Mind (defining your values and life mission), and Put First Things First (managing yourself according to your priorities). The next three habits address public victory and effective interpersonal relationships, and the seventh renews all the others.

What makes this book enduringly powerful is its emphasis on inside-out change, starting with self-mastery before attempting to influence others, demonstrating that quick fixes are superficial unless based on solid character and correct principles.",
        plan: [
            (
                "Be proactive: Focus on what you can control and take responsibility",
                "Habit 1: Be Proactive",
            ),
            (
                "Begin with the end in mind: Define your personal mission statement",
                "Habit 2: Begin with the End in Mind",
            ),
            (
                "Put first things first: Prioritize important over urgent tasks",
                "Habit 3: Put First Things First",
            ),
            (
                "Think win-win: Seek mutual benefit in all interactions",
                "Habit 4: Think Win-Win",
            ),
            (
                "Seek first to understand, then to be understood: Practice empathetic listening",
                "Habit 5: Seek First to Understand, Then to Be Understood",
            ),
            (
                "Synergize: Value differences and work collaboratively",
                "Habit 6: Synergize",
            ),
            (
                "Sharpen the saw: Continuously improve in all four dimensions of life",
                "Habit 7: Sharpen the Saw",
            ),
        ],
    },
];

pub(super) fn books() -> Vec<Book> {
    ENTRIES.iter().map(Entry::to_book).collect()
}

impl Entry {
    fn to_book(&self) -> Book {
        let actionable_steps = self
            .plan
            .iter()
            .zip(WEEKDAYS)
            .map(|((step, chapter), day)| ActionableStep {
                step: step.to_string(),
                chapter: chapter.to_string(),
                day: Some(day.to_string()),
                details: backfill::details_for(step, chapter),
            })
            .collect();

        Book {
            title: self.title.to_string(),
            author: self.author.to_string(),
            summary: self.summary.to_string(),
            actionable_steps,
            cover_image_url: Some(cover::resolve(Some(self.isbn), Some(self.title))),
            published_year: Some(self.published_year),
            genre: Some(self.genre.to_string()),
            isbn: Some(self.isbn.to_string()),
        }
    }
}
