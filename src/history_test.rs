use super::*;

#[test]
fn empty_conversation_projects_empty() {
    assert!(project(&[]).is_empty());
}

#[test]
fn text_and_code_turns_are_retained() {
    let messages = vec![
        ChatMessage::user("write a loop"),
        ChatMessage::assistant_code("for i in 0..10 {}"),
        ChatMessage::user("thanks"),
        ChatMessage::assistant_text("any time"),
    ];
    let turns = project(&messages);
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[1].content, "for i in 0..10 {}");
}

#[test]
fn error_turns_are_excluded() {
    let messages = vec![
        ChatMessage::user("hello"),
        ChatMessage::error("Sorry, something broke."),
        ChatMessage::user("hello again"),
    ];
    let turns = project(&messages);
    assert_eq!(turns.len(), 2);
    assert!(turns.iter().all(|t| t.content.starts_with("hello")));
}

#[test]
fn image_turns_are_excluded() {
    let messages = vec![
        ChatMessage::user("a cat"),
        ChatMessage::assistant_image("Here is your generated image.", "data:image/png;base64,AAAA"),
        ChatMessage::user("now a dog"),
    ];
    let turns = project(&messages);
    assert_eq!(turns.len(), 2);
    assert!(turns.iter().all(|t| t.role == MessageRole::User));
}

#[test]
fn mixed_conversation_never_projects_error_or_image_sources() {
    let messages = vec![
        ChatMessage::user("one"),
        ChatMessage::error("err"),
        ChatMessage::assistant_text("two"),
        ChatMessage::assistant_image("cap", "data:image/png;base64,AA"),
        ChatMessage::assistant_code("three"),
    ];
    let turns = project(&messages);
    assert_eq!(turns.len(), 3);
    assert!(turns.iter().all(|t| t.content != "err" && t.content != "cap"));
}

#[test]
fn relative_order_is_preserved() {
    let messages = vec![
        ChatMessage::user("a"),
        ChatMessage::error("x"),
        ChatMessage::assistant_text("b"),
        ChatMessage::user("c"),
    ];
    let turns = project(&messages);
    let contents: Vec<&str> = turns.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
}

#[test]
fn projection_is_recomputed_not_cached() {
    let mut messages = vec![ChatMessage::user("a")];
    assert_eq!(project(&messages).len(), 1);
    messages.push(ChatMessage::assistant_text("b"));
    assert_eq!(project(&messages).len(), 2);
}
