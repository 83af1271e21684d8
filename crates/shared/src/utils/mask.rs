pub fn mask_card_number(number: &str) -> String {
    let len = number.len();
    if len < 8 || !number.is_ascii() {
        "****".to_string()
    } else {
        let prefix = &number[..4];
        let suffix = &number[len - 4..];
        format!("{prefix}****{suffix}")
    }
}
