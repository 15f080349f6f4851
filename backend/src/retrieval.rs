use std::collections::{BTreeMap, BTreeSet};

use shared::types::{ActiveUser, RetrievalAppDetails, RetrievalAppListDetails, RetrievalContext, RetrievalData};

use crate::types::{Chain, RetrievalAppMetadata};

/// Newest prompt first.
pub fn sort_retrievals(mut retrievals: Vec<RetrievalData>) -> Vec<RetrievalData> {
    retrievals.sort_by(|a, b| b.prompt_time.cmp(&a.prompt_time));
    retrievals
}

pub fn active_users(retrievals: &[RetrievalData]) -> BTreeMap<String, ActiveUser> {
    let mut users: BTreeMap<String, ActiveUser> = BTreeMap::new();
    for retrieval in retrievals {
        let user = users.entry(retrieval.user.clone()).or_default();
        user.retrievals.push(retrieval.clone());
        if retrieval.prompt_time > user.last_accessed_time {
            user.last_accessed_time = retrieval.prompt_time.clone();
        }
        for group in &retrieval.linked_groups {
            if !user.linked_groups.contains(group) {
                user.linked_groups.push(group.clone());
            }
        }
    }
    for user in users.values_mut() {
        user.linked_groups.sort();
    }
    users
}

/// User names ordered by retrieval count, most active first.
pub fn users_by_activity(users: &BTreeMap<String, ActiveUser>) -> Vec<String> {
    let mut names = users.iter().map(|(name, user)| (user.retrievals.len(), name.clone())).collect::<Vec<_>>();
    names.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    names.into_iter().map(|(_, name)| name).collect()
}

/// Merges per-app users into the dashboard-wide map.
pub fn accumulate_users(total: &mut BTreeMap<String, ActiveUser>, users: BTreeMap<String, ActiveUser>) {
    for (name, user) in users {
        match total.get_mut(&name) {
            Some(existing) => {
                existing.retrievals.extend(user.retrievals);
                if user.last_accessed_time > existing.last_accessed_time {
                    existing.last_accessed_time = user.last_accessed_time;
                }
                for group in user.linked_groups {
                    if !existing.linked_groups.contains(&group) {
                        existing.linked_groups.push(group);
                    }
                }
            }
            None => {
                total.insert(name, user);
            }
        }
    }
}

pub fn group_by_context(
    retrievals: &[RetrievalData],
    key: fn(&RetrievalContext) -> &str,
) -> BTreeMap<String, Vec<RetrievalData>> {
    let mut groups: BTreeMap<String, Vec<RetrievalData>> = BTreeMap::new();
    for retrieval in retrievals {
        for context in &retrieval.context {
            let name = key(context);
            if !name.is_empty() {
                groups.entry(name.to_string()).or_default().push(retrieval.clone());
            }
        }
    }
    groups
}

pub fn vector_dbs_from_chains(chains: &[Chain]) -> Vec<String> {
    chains.iter()
        .flat_map(|chain| chain.vector_dbs.iter().filter_map(|db| db.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn app_list_details(metadata: &RetrievalAppMetadata, retrievals: &[RetrievalData]) -> RetrievalAppListDetails {
    let users = active_users(retrievals);
    RetrievalAppListDetails {
        name: metadata.name.clone(),
        owner: metadata.owner.clone(),
        retrievals: retrievals.to_vec(),
        active_users: users_by_activity(&users),
        vector_dbs: vector_dbs_from_chains(&metadata.chains),
        documents: group_by_context(retrievals, |c| c.retrieved_from.as_str()).into_keys().collect(),
    }
}

pub fn app_details(metadata: RetrievalAppMetadata) -> RetrievalAppDetails {
    let retrievals = sort_retrievals(metadata.retrievals);
    RetrievalAppDetails {
        active_users: active_users(&retrievals),
        vector_dbs: group_by_context(&retrievals, |c| c.vector_db.as_str()),
        documents: group_by_context(&retrievals, |c| c.retrieved_from.as_str()),
        name: metadata.name,
        description: metadata.description,
        framework: metadata.framework,
        instance_details: metadata.instance_details,
        pebblo_server_version: metadata.pebblo_server_version,
        pebblo_client_version: metadata.pebblo_client_version,
        retrievals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VectorDb;

    fn retrieval(user: &str, time: &str, doc: &str, groups: &[&str]) -> RetrievalData {
        RetrievalData {
            user: user.to_string(),
            prompt_time: time.to_string(),
            linked_groups: groups.iter().map(|g| g.to_string()).collect(),
            context: vec![RetrievalContext {
                retrieved_from: doc.to_string(),
                vector_db: "chroma".to_string(),
                ..RetrievalContext::default()
            }],
            ..RetrievalData::default()
        }
    }

    fn sample() -> Vec<RetrievalData> {
        vec![
            retrieval("bob", "2024-03-01T10:00:00", "hr.pdf", &["hr"]),
            retrieval("alice", "2024-03-02T10:00:00", "hr.pdf", &["eng"]),
            retrieval("bob", "2024-03-03T10:00:00", "pay.pdf", &["finance", "hr"]),
        ]
    }

    #[test]
    fn newest_retrieval_first() {
        let sorted = sort_retrievals(sample());
        assert_eq!(sorted[0].prompt_time, "2024-03-03T10:00:00");
        assert_eq!(sorted[2].prompt_time, "2024-03-01T10:00:00");
    }

    #[test]
    fn users_collect_their_retrievals() {
        let users = active_users(&sample());
        let bob = &users["bob"];
        assert_eq!(bob.retrievals.len(), 2);
        assert_eq!(bob.last_accessed_time, "2024-03-03T10:00:00");
        assert_eq!(bob.linked_groups, vec!["finance", "hr"]);
        assert_eq!(users_by_activity(&users), vec!["bob", "alice"]);
    }

    #[test]
    fn accumulating_users_merges_retrievals() {
        let mut total = active_users(&sample()[..1]);
        accumulate_users(&mut total, active_users(&sample()[1..]));
        assert_eq!(total["bob"].retrievals.len(), 2);
        assert_eq!(total["alice"].retrievals.len(), 1);
        assert_eq!(total["bob"].last_accessed_time, "2024-03-03T10:00:00");
    }

    #[test]
    fn documents_grouped_by_source() {
        let groups = group_by_context(&sample(), |c| c.retrieved_from.as_str());
        assert_eq!(groups["hr.pdf"].len(), 2);
        assert_eq!(groups["pay.pdf"].len(), 1);
    }

    #[test]
    fn vector_dbs_are_unique() {
        let chains = vec![
            Chain {
                vector_dbs: vec![VectorDb { name: Some("chroma".to_string()) }, VectorDb { name: None }],
                ..Chain::default()
            },
            Chain { vector_dbs: vec![VectorDb { name: Some("chroma".to_string()) }], ..Chain::default() },
        ];
        assert_eq!(vector_dbs_from_chains(&chains), vec!["chroma"]);
    }

    #[test]
    fn details_are_built_from_metadata() {
        let metadata = RetrievalAppMetadata {
            name: "rag".to_string(),
            retrievals: sample(),
            ..RetrievalAppMetadata::default()
        };
        let details = app_details(metadata);
        assert_eq!(details.name, "rag");
        assert_eq!(details.retrievals[0].user, "bob");
        assert_eq!(details.vector_dbs["chroma"].len(), 3);
        assert_eq!(details.documents.len(), 2);
        assert_eq!(details.active_users.len(), 2);
    }
}
