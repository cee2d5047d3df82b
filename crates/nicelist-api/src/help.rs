//! Plain-text usage page served at `/`.

/// `GET /`
pub async fn handler() -> &'static str { USAGE }

const USAGE: &str = "\
Naughty & Nice list API

All bodies are JSON. Errors come back as {\"error\": \"...\"}.

People
  GET    /api/people                   everyone, most recently judged first
  GET    /api/people/:id               one person (404 if unknown)
  POST   /api/people                   {name, isNice?, reason?}    -> 201 {id}
                                       isNice defaults to true
  PATCH  /api/people/:id               {isNice, reason?}           -> {ok: true}
                                       records a new judgement
  DELETE /api/people/:id               removes the person, their infractions
                                       and their appeals           -> {ok: true}

Infractions
  GET    /api/people/:id/infractions   a person's deeds, most recent first
  POST   /api/people/:id/infractions   {description, severity?}    -> 201 {id}
                                       severity 1 (minor) to 5 (coal), default 1

Appeals
  POST   /api/appeals                  {personId, infractionId, appealText}
                                                                   -> 201 {id}
  GET    /api/appeals/pending          appeals awaiting review, newest first
  GET    /api/appeals/:id              one appeal; status 0 pending,
                                       1 approved, 2 denied
  PATCH  /api/appeals/:id/review       {approved}                  -> {ok: true}

Example person:
  {\"id\": 1, \"name\": \"Candy Cane\", \"isNice\": true,
   \"reason\": \"Helped an old lady cross the street\",
   \"checkedAt\": \"2024-12-01T10:00:00Z\"}
";
