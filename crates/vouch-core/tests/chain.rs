use vouch_core::{
    Check, ErrorKind, Validate, Validation, ValidationError, code, validate,
    validation::Gender,
};

#[derive(Debug, Default)]
struct SignUp {
    name: Option<String>,
    email: String,
    country: String,
    gender: Option<String>,
    age: String,
    card_number: String,
    cvv: String,
}

impl SignUp {
    fn validate(&self) -> Validation {
        let mut errors = Validation::new();
        self.name
            .as_deref()
            .validate_in(&mut errors, "name")
            .if_null_or_empty()
            .if_longer_than(32);
        self.email
            .as_str()
            .validate_in(&mut errors, "email")
            .should_be_required()
            .if_not_email();
        self.country
            .as_str()
            .validate_in(&mut errors, "country")
            .should_be_country_code();
        self.gender
            .as_deref()
            .validate_in(&mut errors, "gender")
            .should_be_gender_or_other();
        self.age
            .as_str()
            .validate_in(&mut errors, "age")
            .to_number::<u8>()
            .if_less_than(18u8);
        self.card_number
            .as_str()
            .validate_in(&mut errors, "card_number")
            .should_be_card_number();
        self.cvv.as_str().validate_in(&mut errors, "cvv").should_be_cvv();
        errors
    }
}

#[test]
fn it_accepts_a_valid_form() {
    let form = SignUp {
        name: Some("Nelson".to_owned()),
        email: "fake@fake.tk".to_owned(),
        country: "pt".to_owned(),
        gender: Some("other".to_owned()),
        age: "30".to_owned(),
        card_number: "4000000000006".to_owned(),
        cvv: "000".to_owned(),
    };
    let errors = form.validate();
    assert!(errors.is_success(), "{errors}");
}

#[test]
fn it_collects_errors_across_properties() {
    let form = SignUp {
        name: None,
        email: "nelson.nobre@fake.".to_owned(),
        country: "xx".to_owned(),
        gender: None,
        age: "abc".to_owned(),
        card_number: "4000007240000008".to_owned(),
        cvv: "12345".to_owned(),
    };
    let errors = form.validate();
    assert_eq!(
        errors.invalid_properties(),
        vec!["name", "email", "country", "age", "card_number", "cvv"]
    );

    let age_codes = errors.errors_for("age").map(|e| e.code()).collect::<Vec<_>>();
    assert_eq!(age_codes, vec![code::INVALID, code::INVALID]);

    let map = errors.into_map();
    assert_eq!(
        map.get("name").and_then(|v| v.as_str()),
        Some("The 'name' cannot be null or empty")
    );
    assert_eq!(
        map.get("age").and_then(|v| v.as_str()),
        Some("The 'age' is an invalid")
    );
}

#[test]
fn it_serializes_errors() {
    let errors = Validation::from_error(ValidationError::forbidden(
        "role",
        code::INVALID,
        "The 'role' cannot be equal to 'admin'",
    ));
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["property"], "role");
    assert_eq!(json[0]["code"], "INVALID");
    assert_eq!(json[0]["kind"], "forbidden");
    assert_eq!(errors.first().map(|e| e.kind()), Some(ErrorKind::Forbidden));
}

#[test]
fn it_exposes_the_shared_collection_from_each_context() {
    let mut errors = Validation::new();
    let first_name = "";
    let last_name = "";
    let context = validate!(first_name, &mut errors).if_null_or_empty();
    assert_eq!(context.errors().len(), 1);
    let context = validate!(last_name, &mut errors).if_null_or_empty();
    assert_eq!(context.errors().len(), 2);
    assert_eq!(context.own_errors().len(), 1);
    assert_eq!(errors.invalid_properties(), vec!["first_name", "last_name"]);
}

#[test]
fn it_checks_values_directly() {
    assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
    assert!("4242424242424242".check("card", |ctx| ctx.should_be_card_number()).is_none());

    let error = "4242424242424243"
        .check("card", |ctx| {
            ctx.should_be_card_number_with(|p| {
                ValidationError::conflict(p.to_owned(), "CARD", "card rejected")
            })
        })
        .unwrap();
    assert_eq!(error.kind(), ErrorKind::Conflict);
    assert_eq!(error.to_string(), "card: card rejected");
}
