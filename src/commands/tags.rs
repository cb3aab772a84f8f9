use crate::parser::Tag;

pub fn handle_tags_command() {
    println!("Tag              Classifier label");
    for tag in Tag::ALL {
        println!("{:<16} {}", tag.as_str(), tag.as_bio());
    }
}
