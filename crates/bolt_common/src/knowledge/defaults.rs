//! Built-in school dataset
//!
//! Seeded into the store on first run and on every schema version change.

use super::schema::{KnowledgeCollection, KnowledgeEntry};

/// (id, topic, information)
const DEFAULT_ENTRIES: &[(&str, &str, &str)] = &[
    // General information
    ("gen1", "What are the school opening and closing times?", "Opening (secondary)- 7:30. Closing(Secondary)- 1:10. Opening(Primary)- 1:15. Closing(primary)- 6:00"),
    ("gen2", "Where is the main office located?", "On the ground floor"),
    ("gen3", "Who is the principal of the school?", "Ms. Rakhi Mukherjee"),
    ("gen4", "Who is the vice principal?", "Ms. Shubhangi Amonkar"),
    ("gen5", "How can I contact the administration?", "Details are given in your handbook."),
    ("gen6", "What is the school's email address?", "There are several. Refer to the handbook."),
    ("gen7", "Are visitors allowed inside the school?", "Yes, during fests, competitions, parent teacher meets, etc."),
    ("gen8", "Is there a school handbook available?", "Yes, given on the first day of school."),
    ("gen9", "How can I get information about school fees?", "For details, visit https://ppsijc.org/"),
    ("gen10", "Where is the lost and found?", "Lost items can be retrieved from the supervisor’s office."),
    ("gen11", "Do you have a student ID system?", "Students IDs are provided by the class teacher."),
    ("gen12", "What is the school's motto?", "Not just another school."),
    ("gen13", "Can you provide information about the school history?", "For details, visit https://ppsijc.org/"),

    // Academics & Classes
    ("acad1", "Where can I find the timetable?", "Provided by the class teacher."),
    ("acad2", "What subjects are taught here?", "Visit the school website for further details. https://ppsijc.org/"),
    ("acad3", "Where are the classrooms located?", "Grades 1 / 6 to 3 / 8 (Second floor). Grades 4 / 9 to 5 / 10 (Third Floor)."),
    ("acad4", "Do you have special classes for advanced students?", "Advanced Math and German as 7th subjects in grade 9 and 10"),
    ("acad5", "Do you have remedial classes?", "Yes. Details are provided by the teacher of the subject."),
    ("acad6", "Who can I contact for academic counseling?", "Ms. Shraddha Kumar. Details given in the handbook."),

    // Library
    ("lib1", "Where is the library?", "On the fourth floor"),
    ("lib2", "What are the library timings?", "Details given in the handbook"),
    ("lib3", "How can I borrow books?", "Details given in the handbook."),
];

/// The built-in default collection, in display order
pub fn default_knowledge_base() -> KnowledgeCollection {
    DEFAULT_ENTRIES
        .iter()
        .map(|(id, topic, information)| KnowledgeEntry::new(*id, *topic, *information))
        .collect()
}
