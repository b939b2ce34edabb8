use super::pricing::SuppSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Custom,
    Name,
    Email,
    Comment,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[Self::Custom, Self::Name, Self::Email, Self::Comment]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Custom => "Custom Supps",
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Comment => "Your Comment",
        }
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorForm {
    pub donor_name: String,
    pub donor_email: String,
    pub donor_comment: String,
}

impl DonorForm {
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Custom => None,
            FormField::Name => Some(&mut self.donor_name),
            FormField::Email => Some(&mut self.donor_email),
            FormField::Comment => Some(&mut self.donor_comment),
        }
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Custom => None,
            FormField::Name => Some(&self.donor_name),
            FormField::Email => Some(&self.donor_email),
            FormField::Comment => Some(&self.donor_comment),
        }
    }
}

/// Payload handed to the checkout-initiation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub amount: i64,
    pub creator_user: String,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_comment: String,
}

/// Build the checkout payload, or nothing when creator, name or email is blank.
pub fn checkout_request(
    creator_user: &str,
    selection: &SuppSelection,
    form: &DonorForm,
) -> Option<CheckoutRequest> {
    let creator_user = creator_user.trim();
    let donor_name = form.donor_name.trim();
    let donor_email = form.donor_email.trim();
    if creator_user.is_empty() || donor_name.is_empty() || donor_email.is_empty() {
        return None;
    }
    Some(CheckoutRequest {
        amount: selection.amount_cents,
        creator_user: creator_user.to_string(),
        donor_name: donor_name.to_string(),
        donor_email: donor_email.to_string(),
        donor_comment: form.donor_comment.clone(),
    })
}
