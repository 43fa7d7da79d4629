/// One-shot status shown on the admin page after a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Generated,
    Cleared,
    NotEnough,
    Failed,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::Generated => "generated",
            Notice::Cleared => "cleared",
            Notice::NotEnough => "not_enough",
            Notice::Failed => "failed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "generated" => Some(Notice::Generated),
            "cleared" => Some(Notice::Cleared),
            "not_enough" => Some(Notice::NotEnough),
            "failed" => Some(Notice::Failed),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Generated => "Mapping generated.",
            Notice::Cleared => "Mapping cleared.",
            Notice::NotEnough => "Need at least 2 submissions to generate a swap.",
            Notice::Failed => "Unable to generate mapping, try again.",
        }
    }

    pub fn redirect_target(self) -> String {
        format!("/admin?notice={}", self.code())
    }
}
