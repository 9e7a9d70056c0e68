//! Profile payloads shaped like the backend's responses.

use serde_json::{Value, json};

/// Ann Lee: no phone, no login yet, balance 10, no tickets
pub fn ann_lee_json() -> Value {
    json!({
        "user": {
            "name": "Ann",
            "surname": "Lee",
            "email": "a@x.com",
            "phone": null,
            "last_login": null,
            "balance": 10,
            "birth_date": "1990-02-03"
        },
        "tickets": []
    })
}

/// One event in the given state
pub fn ticket_json(event_name: &str, is_done: bool, is_cancelled: bool) -> Value {
    json!({
        "event_info": {
            "event_name": event_name,
            "event_date": "2024-07-01",
            "organizer_name": "Live Org",
            "venue": {
                "name": "Arena",
                "city": "Austin",
                "state": "TX",
                "street": "1 Main St"
            },
            "restrictions": {
                "alcohol": true,
                "smoke": false,
                "age": 21,
                "max_ticket": 6
            },
            "is_done": is_done,
            "is_cancelled": is_cancelled
        },
        "ticket_info": {
            "category_name": "VIP",
            "price": 150,
            "seat_number": "A-17"
        }
    })
}

/// Bob Stone: full contact info and two tickets
pub fn bob_stone_json() -> Value {
    json!({
        "user": {
            "name": "Bob",
            "surname": "Stone",
            "email": "bob@example.com",
            "phone": "+1 555 0100",
            "last_login": "2024-06-30T10:00:00",
            "balance": 99.5,
            "birth_date": "1985-11-20"
        },
        "tickets": [
            ticket_json("Summer Fest", false, false),
            ticket_json("Winter Gala", false, true)
        ]
    })
}
