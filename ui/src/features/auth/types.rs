// Form state for login and registration - no dioxus imports needed here
use std::collections::BTreeMap;

use super::form_validation::{validate_login, validate_registration, PROFILE_PICTURE_NOT_IMAGE};
use crate::features::location::LocationCascade;
use crate::features::notice::Notice;
use crate::services::client::{FileDescriptor, LoginRequest, RegistrationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Mobile,
    Gender,
    Hobbies,
    ProfilePicture,
    Country,
    State,
    City,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Mobile => "mobile",
            Field::Gender => "gender",
            Field::Hobbies => "hobbies",
            Field::ProfilePicture => "profilePic",
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
        }
    }
}

/// Field → message map, recomputed on every validation pass
pub type FieldErrors = BTreeMap<Field, String>;

pub fn error_field_names(errors: &FieldErrors) -> Vec<String> {
    errors.keys().map(|f| f.as_str().to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hobby {
    Reading,
    Traveling,
    Gaming,
    Cooking,
}

impl Hobby {
    pub const ALL: [Hobby; 4] = [Hobby::Reading, Hobby::Traveling, Hobby::Gaming, Hobby::Cooking];

    pub fn label(&self) -> &'static str {
        match self {
            Hobby::Reading => "Reading",
            Hobby::Traveling => "Traveling",
            Hobby::Gaming => "Gaming",
            Hobby::Cooking => "Cooking",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hobby::Reading => "reading",
            Hobby::Traveling => "traveling",
            Hobby::Gaming => "gaming",
            Hobby::Cooking => "cooking",
        }
    }
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "avif", "ico", "tif", "tiff", "heic",
];

/// File picked in a file input; only its metadata is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: Option<u64>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    /// Judged by file extension
    pub fn is_image(&self) -> bool {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    pub fn descriptor(&self) -> FileDescriptor {
        FileDescriptor {
            name: self.name.clone(),
            size: self.size,
        }
    }
}

/// Outcome of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Ready(T),
    Invalid,
    /// A request from an earlier press is still in flight
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    SubmitFailed(String),
    SubmitSucceeded,
}

impl LoginForm {
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => self.email = email,
            LoginAction::SetPassword(password) => self.password = password,
            LoginAction::SubmitFailed(message) => {
                self.submitting = false;
                self.notice = Some(Notice::error(message));
            }
            LoginAction::SubmitSucceeded => {
                self.submitting = false;
                self.password.clear();
            }
        }
    }

    /// Validate; on success mark the form as submitting and build the request
    pub fn submit(&mut self) -> Submission<LoginRequest> {
        if self.submitting {
            return Submission::InFlight;
        }
        self.errors = validate_login(self);
        if !self.errors.is_empty() {
            return Submission::Invalid;
        }
        self.submitting = true;
        self.notice = None;
        Submission::Ready(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub gender: Option<Gender>,
    pub hobbies: Vec<Hobby>,
    pub profile_picture: Option<SelectedFile>,
    pub attachments: Vec<SelectedFile>,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone)]
pub enum RegistrationAction {
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    SetMobile(String),
    SetGender(Option<Gender>),
    ToggleHobby(Hobby),
    SetProfilePicture(Option<SelectedFile>),
    SetAttachments(Vec<SelectedFile>),
    SubmitFailed(String),
    SubmitSucceeded(String),
}

impl RegistrationForm {
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SetName(name) => self.name = name,
            RegistrationAction::SetEmail(email) => self.email = email,
            RegistrationAction::SetPassword(password) => self.password = password,
            RegistrationAction::SetMobile(mobile) => self.mobile = mobile,
            RegistrationAction::SetGender(gender) => self.gender = gender,
            RegistrationAction::ToggleHobby(hobby) => {
                if let Some(pos) = self.hobbies.iter().position(|h| *h == hobby) {
                    self.hobbies.remove(pos);
                } else {
                    self.hobbies.push(hobby);
                    self.hobbies.sort();
                }
            }
            RegistrationAction::SetProfilePicture(file) => {
                // A rejected file stays selected so submit keeps reporting why
                match &file {
                    Some(f) if !f.is_image() => {
                        self.errors
                            .insert(Field::ProfilePicture, PROFILE_PICTURE_NOT_IMAGE.to_string());
                    }
                    _ => {
                        self.errors.remove(&Field::ProfilePicture);
                    }
                }
                self.profile_picture = file;
            }
            RegistrationAction::SetAttachments(files) => self.attachments = files,
            RegistrationAction::SubmitFailed(message) => {
                self.submitting = false;
                self.notice = Some(Notice::error(message));
            }
            RegistrationAction::SubmitSucceeded(message) => {
                *self = RegistrationForm {
                    notice: Some(Notice::success(message)),
                    ..RegistrationForm::default()
                };
            }
        }
    }

    /// Validate against the current location selection; on success mark the
    /// form as submitting and build the request
    pub fn submit(&mut self, location: &LocationCascade) -> Submission<RegistrationRequest> {
        if self.submitting {
            return Submission::InFlight;
        }
        self.errors = validate_registration(self, location);
        if !self.errors.is_empty() {
            return Submission::Invalid;
        }

        let (Some(gender), Some(picture), Some(country)) = (
            self.gender,
            self.profile_picture.as_ref(),
            location.selection.country.as_ref(),
        ) else {
            return Submission::Invalid;
        };
        let profile_picture = picture.descriptor();

        self.submitting = true;
        self.notice = None;
        Submission::Ready(RegistrationRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            mobile: self.mobile.trim().to_string(),
            gender: gender.as_str().to_string(),
            hobbies: self.hobbies.iter().map(|h| h.as_str().to_string()).collect(),
            country: country.key().to_string(),
            state: location.selection.state.as_ref().map(|s| s.key().to_string()),
            city: location.selection.city.as_ref().map(|c| c.name.clone()),
            profile_picture,
            attachments: self.attachments.iter().map(SelectedFile::descriptor).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_by_extension() {
        assert!(SelectedFile::new("avatar.PNG").is_image());
        assert!(SelectedFile::new("holiday.photo.webp").is_image());
        assert!(!SelectedFile::new("resume.pdf").is_image());
        assert!(!SelectedFile::new("noextension").is_image());
    }

    #[test]
    fn test_toggle_hobby_keeps_canonical_order() {
        let mut form = RegistrationForm::default();
        form.reduce_in_place(RegistrationAction::ToggleHobby(Hobby::Cooking));
        form.reduce_in_place(RegistrationAction::ToggleHobby(Hobby::Reading));
        assert_eq!(form.hobbies, vec![Hobby::Reading, Hobby::Cooking]);

        form.reduce_in_place(RegistrationAction::ToggleHobby(Hobby::Cooking));
        assert_eq!(form.hobbies, vec![Hobby::Reading]);
    }

    #[test]
    fn test_non_image_profile_picture_rejected() {
        let mut form = RegistrationForm::default();
        form.reduce_in_place(RegistrationAction::SetProfilePicture(Some(
            SelectedFile::new("notes.txt"),
        )));

        assert_eq!(
            form.errors.get(&Field::ProfilePicture).map(String::as_str),
            Some("Profile picture must be an image file")
        );

        form.reduce_in_place(RegistrationAction::SetProfilePicture(Some(
            SelectedFile::new("me.jpg"),
        )));
        assert!(form.profile_picture.is_some());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("other"), Some(Gender::Other));
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_login_submit_blocks_while_in_flight() {
        let mut form = LoginForm::default();
        form.reduce_in_place(LoginAction::SetEmail(" user@example.com ".to_string()));
        form.reduce_in_place(LoginAction::SetPassword("hunter22".to_string()));

        let request = form.submit();
        assert_eq!(
            request,
            Submission::Ready(LoginRequest {
                email: "user@example.com".to_string(),
                password: "hunter22".to_string(),
            })
        );
        assert_eq!(form.submit(), Submission::InFlight);

        form.reduce_in_place(LoginAction::SubmitFailed("Invalid email or password".to_string()));
        assert!(!form.submitting);
        assert_eq!(
            form.notice,
            Some(Notice::error("Invalid email or password"))
        );
    }
}
