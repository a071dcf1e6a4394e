//! Login, signup and forgot-password screens. Password fields are never
//! echoed back into the markup.

use crate::auth::{LoginForm, SignupForm};
use crate::config::APP_NAME;
use crate::views::{attr, esc, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub form: LoginForm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub form: SignupForm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordState {
    pub email: String,
    /// Set once the reset link has been "sent"; switches to the check-your-email card.
    pub sent: bool,
}

fn input(name: &str, kind: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label>{label}<input name="{name}" type="{kind}" value="{value}" required></label>"#,
        label = esc(label),
        name = name,
        kind = kind,
        value = attr(value),
    )
}

pub fn render_login(state: &LoginState) -> Page {
    let body = format!(
        r#"<section class="auth">
<div class="brand">🏘️</div>
<h1>{app}</h1>
<p class="muted">Welcome back to your community</p>
<div class="card">
<h2>Sign In</h2>
<button data-action="login-google">Continue with Google</button>
<form data-action="login-email">
{email}
{password}
<button type="submit">Sign In</button>
</form>
<a href="/forgot-password">Forgot password?</a>
<p class="muted">Don't have an account? <a href="/signup">Sign up</a></p>
</div>
</section>"#,
        app = esc(APP_NAME),
        email = input("email", "email", "Email", &state.form.email),
        password = input("password", "password", "Password", ""),
    );
    Page::new("Sign In", body)
}

pub fn render_signup(state: &SignupState) -> Page {
    let form = &state.form;
    let body = format!(
        r#"<section class="auth">
<div class="brand">🌟</div>
<h1>Join Your Community</h1>
<p class="muted">Connect with neighbors and stay informed</p>
<div class="card">
<h2>Create Account</h2>
<form data-action="signup">
{name}
{email}
{location}
{password}
{confirm}
<button type="submit">Create Account</button>
</form>
<p class="muted">Already have an account? <a href="/login">Sign in</a></p>
</div>
</section>"#,
        name = input("name", "text", "Full Name", &form.name),
        email = input("email", "email", "Email", &form.email),
        location = input("location", "text", "Location", &form.location),
        password = input("password", "password", "Password", ""),
        confirm = input("confirmPassword", "password", "Confirm Password", ""),
    );
    Page::new("Sign Up", body)
}

pub fn render_forgot_password(state: &ForgotPasswordState) -> Page {
    let body = if state.sent {
        format!(
            r#"<section class="auth"><div class="card">
<div class="brand">📧</div>
<h2>Check Your Email</h2>
<p>We've sent a password reset link to <strong>{}</strong></p>
<a href="/login">Back to Sign In</a>
</div></section>"#,
            esc(&state.email)
        )
    } else {
        format!(
            r#"<section class="auth"><div class="card">
<div class="brand">🔑</div>
<h2>Reset Password</h2>
<p class="muted">Enter your email and we'll send you a reset link</p>
<form data-action="forgot-password">
{}
<button type="submit">Send Reset Link</button>
</form>
<a href="/login">Back to Sign In</a>
</div></section>"#,
            input("email", "email", "Email", &state.email)
        )
    };
    Page::new("Forgot Password", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_keeps_typed_values_but_not_passwords() {
        let state = SignupState {
            form: SignupForm {
                name: "Anjali \"AR\" Rao".into(),
                password: "hunter2".into(),
                confirm_password: "hunter3".into(),
                ..Default::default()
            },
        };
        let page = render_signup(&state);
        assert!(page.body.contains("Anjali &quot;AR&quot; Rao"));
        assert!(!page.body.contains("hunter"));
    }

    #[test]
    fn forgot_password_switches_to_sent_card() {
        let mut state = ForgotPasswordState { email: "a@b.in".into(), sent: false };
        assert!(render_forgot_password(&state).body.contains("Send Reset Link"));
        state.sent = true;
        let body = render_forgot_password(&state).body;
        assert!(body.contains("Check Your Email"));
        assert!(body.contains("<strong>a@b.in</strong>"));
    }

    #[test]
    fn login_offers_google() {
        assert!(render_login(&LoginState::default()).body.contains("login-google"));
    }
}
