//! The Family Tree API, folder by folder.

use crate::{
    builder::{add_group, build_request, new_collection},
    error::Result,
    payloads::{AddMemberRequest, AddRelationshipRequest, CreateTreeRequest, Gender, RootPerson},
    script::{assertion_script, BodyChecks},
    types::{Body, Collection, Group, Header, Method},
};

pub const COLLECTION_NAME: &str = "Family Tree API - Java";
pub const DESCRIPTION: &str = "Family Tree REST API using Spring Boot and JPA";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const TREE: &str = "{{treeId}}";
const MEMBER: &str = "{{memberId}}";

pub fn family_tree_collection(base_url: &str) -> Result<Collection> {
    let mut collection = new_collection(COLLECTION_NAME, DESCRIPTION, base_url);
    add_group(&mut collection, health())?;
    add_group(&mut collection, trees()?)?;
    add_group(&mut collection, members()?)?;
    add_group(&mut collection, relationships()?)?;
    Ok(collection)
}

fn health() -> Group {
    Group {
        name: "Health".to_string(),
        requests: vec![build_request(
            "Health Check",
            Method::Get,
            &["health"],
            vec![],
            None,
            &assertion_script(
                200,
                BodyChecks::new("Response has status field")
                    .property("status")
                    .equals("status", "ok"),
            ),
        )],
    }
}

fn trees() -> Result<Group> {
    let smith = CreateTreeRequest {
        tree_name: "Smith Family".to_string(),
        description: "The Smith family genealogy".to_string(),
        root_person: RootPerson {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            gender: Gender::Male,
        },
    };
    let tree_props =
        || BodyChecks::new("Response has tree properties").properties(["id", "name"]);

    Ok(Group {
        name: "Family Trees".to_string(),
        requests: vec![
            build_request(
                "Create Family Tree",
                Method::Post,
                &["api", "trees"],
                vec![Header::json_content()],
                Some(Body::json(&smith)?),
                &assertion_script(200, tree_props().capture("id", "treeId")),
            ),
            build_request(
                "Get All Trees",
                Method::Get,
                &["api", "trees"],
                vec![],
                None,
                &assertion_script(200, is_array()),
            ),
            build_request(
                "Get Tree by ID",
                Method::Get,
                &["api", "trees", TREE],
                vec![],
                None,
                &assertion_script(200, tree_props()),
            ),
            build_request(
                "Get Tree with Members",
                Method::Get,
                &["api", "trees", TREE, "full"],
                vec![],
                None,
                &assertion_script(
                    200,
                    BodyChecks::new("Response has members").property("members"),
                ),
            ),
            build_request(
                "Delete Tree",
                Method::Delete,
                &["api", "trees", TREE],
                vec![],
                None,
                &assertion_script(
                    200,
                    BodyChecks::new("Response has message").property("message"),
                ),
            ),
        ],
    })
}

fn members() -> Result<Group> {
    let jane = AddMemberRequest {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        gender: Gender::Female,
        birth_date: "1990-05-15".to_string(),
    };
    let member_props = || BodyChecks::new("Response has member properties");

    Ok(Group {
        name: "Family Members".to_string(),
        requests: vec![
            build_request(
                "Add Member to Tree",
                Method::Post,
                &["api", "trees", TREE, "members"],
                vec![Header::json_content()],
                Some(Body::json(&jane)?),
                &assertion_script(
                    200,
                    member_props()
                        .properties(["id", "firstName", "lastName"])
                        .capture("id", "memberId"),
                ),
            ),
            build_request(
                "Get All Members",
                Method::Get,
                &["api", "trees", TREE, "members"],
                vec![],
                None,
                &assertion_script(200, is_array()),
            ),
            build_request(
                "Get Member by ID",
                Method::Get,
                &["api", "trees", TREE, "members", MEMBER],
                vec![],
                None,
                &assertion_script(200, member_props().properties(["id", "firstName"])),
            ),
        ],
    })
}

fn relationships() -> Result<Group> {
    let relate = |name: &str, segment: &str, related_member_id: u64| -> Result<_> {
        Ok(build_request(
            name,
            Method::Post,
            &["api", "trees", TREE, "members", MEMBER, segment],
            vec![Header::json_content()],
            Some(Body::json(&AddRelationshipRequest { related_member_id })?),
            &assertion_script(
                200,
                BodyChecks::new("Response has relationship properties")
                    .properties(["id", "relationshipType"]),
            ),
        ))
    };

    Ok(Group {
        name: "Relationships".to_string(),
        requests: vec![
            relate("Add Partner", "partner", 2)?,
            relate("Add Child", "children", 3)?,
            build_request(
                "Get Relationships",
                Method::Get,
                &["api", "trees", TREE, "members", MEMBER, "relationships"],
                vec![],
                None,
                &assertion_script(200, is_array()),
            ),
        ],
    })
}

fn is_array() -> BodyChecks {
    BodyChecks::new("Response is an array").array()
}
