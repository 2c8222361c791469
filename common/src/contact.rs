//! お問い合わせフォーム
//!
//! 空欄チェックと mailto 本文の組み立て。送信そのものは行わず、
//! URIエンコードと画面遷移はWASM側に任せる

use crate::locale::Dictionary;

/// フォーム入力（前後の空白は落として保持する）
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// 全項目が埋まっているか
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// メール本文を組み立てる（ラベルは現在の辞書から引く）
    pub fn compose_body(&self, dict: &Dictionary) -> String {
        let name_label = dict.lookup("contact.form.name", "Name");
        format!(
            "{}: {}\nEmail: {}\n\n{}",
            name_label, self.name, self.email, self.message
        )
    }
}

/// メール件名
pub fn compose_subject(dict: &Dictionary) -> String {
    dict.lookup("contact.form.subject", "Portfolio contact").to_string()
}
