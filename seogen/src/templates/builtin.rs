//! Built-in template pools
//!
//! Placeholders available per page type:
//! - game: `{title}`, `{category}`, `{features}`, `{developer}`
//! - category: `{category}`, `{categoryLower}`, `{gameCount}`
//! - tag: `{tag}`, `{tagLower}`, `{gameCount}`
//! - home: `{siteName}`, `{gameCount}`, `{categoryCount}`
//!
//! Descriptions are written to land near the 120-160 character window once
//! substituted; the generator truncates anything longer.

use super::{Genre, TemplateSet};

/// Built-in pools for a genre
pub fn genre_set(genre: Genre) -> TemplateSet {
    match genre {
        Genre::Action => action(),
        Genre::Puzzle => puzzle(),
        Genre::Adventure => adventure(),
        Genre::Strategy => strategy(),
        Genre::Racing => racing(),
        Genre::Default => default_genre(),
    }
}

fn action() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Play {title} - Free Action Game Online",
            "{title} - Fast-Paced Action Game",
            "Free {title} Game - Action Packed Fun",
            "{title} Online - Action Gaming in Your Browser",
            "Action Game {title} - Play Free Now",
        ],
        &[
            "Experience thrilling action in {title}! This exciting {category} game offers intense gameplay with {features}. Play free online now and enjoy hours of fun.",
            "Dive into the action-packed world of {title}. This {category} game features {features} and delivers non-stop excitement. Start playing for free today!",
            "Get ready for adrenaline-pumping action in {title}. This free online {category} game brings you {features} and endless fun. Nothing to set up, just play!",
            "{title} delivers heart-racing action and tough challenges. Experience {features} in this {category} game. Play instantly in your browser at no cost!",
            "Join the action in {title}! This captivating {category} game offers {features} and guarantees hours of entertainment. Play free online now!",
        ],
        &[
            "action games, {title}, free online games, {category} games",
            "{title} game, action adventure, free browser games, online gaming",
            "play {title}, action games online, free {category}, browser games",
            "{title} online, action gaming, free games, {category} challenge",
        ],
        &[
            "A strong pick for action game enthusiasts",
            "Ideal for players seeking thrilling challenges",
            "Great for quick gaming sessions",
            "Excellent for stress relief and entertainment",
            "Made for competitive players",
        ],
        &[
            "Features intense combat and tactical gameplay",
            "Offers challenging levels and exciting rewards",
            "Includes dynamic environments and smooth controls",
            "Provides a gripping storyline and character growth",
            "Delivers fast-paced action and sharp visuals",
        ],
        &[
            "Navigate through challenging levels while defeating enemies",
            "Use tactical thinking to overcome obstacles and bosses",
            "Collect power-ups and upgrades to enhance your abilities",
            "Master different combat techniques and special moves",
            "Explore diverse environments and unlock new areas",
        ],
    )
}

fn puzzle() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Play {title} - Free Puzzle Game Online",
            "{title} - Brain Training Puzzle Challenge",
            "Free {title} Game - Mind Bending Puzzles",
            "{title} Online - Logic Puzzle Game",
            "Puzzle Game {title} - Test Your Skills",
        ],
        &[
            "Challenge your mind with {title}! This engaging {category} game features {features} and will test your problem-solving skills. Play free online now!",
            "Exercise your brain with {title}. This clever {category} game offers {features} and provides hours of mental stimulation. Start solving puzzles today!",
            "Put your thinking skills to the test in {title}. This free online {category} game brings you {features} and endless brain-teasing fun. Play it now.",
            "{title} offers a satisfying mental workout. Experience {features} in this challenging {category} game. Play instantly and boost your brainpower!",
            "Sharpen your mind with {title}! This captivating {category} game features {features} and guarantees thoughtful entertainment. Play free now!",
        ],
        &[
            "puzzle games, {title}, brain games, {category} puzzles",
            "{title} game, logic puzzles, free brain training, online puzzles",
            "play {title}, puzzle games online, free {category}, mind games",
            "{title} online, brain training, puzzle solving, {category} games",
        ],
        &[
            "Great for brain training and mental exercise",
            "Ideal for players who enjoy logical challenges",
            "Helps improve problem-solving skills",
            "Excellent for relaxation and mindfulness",
            "A fine choice for educational entertainment",
        ],
        &[
            "Features progressively challenging puzzle levels",
            "Offers multiple solution paths and creative thinking",
            "Includes helpful hints and step-by-step guidance",
            "Provides satisfying breakthroughs and achievements",
            "Delivers a clean interface and intuitive controls",
        ],
        &[
            "Analyze patterns and use logical reasoning to solve puzzles",
            "Think creatively to find unique solutions to challenges",
            "Progress through increasingly difficult levels",
            "Use trial and error to discover the correct approach",
            "Apply careful planning to overcome complex obstacles",
        ],
    )
}

fn adventure() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Play {title} - Epic Adventure Game Online",
            "{title} - Thrilling Adventure Quest",
            "Free {title} Game - Adventure Awaits",
            "{title} Online - Explore and Discover",
            "Adventure Game {title} - Journey Begins",
        ],
        &[
            "Embark on an epic journey in {title}! This immersive {category} game features {features} and takes you on memorable adventures. Play free online now!",
            "Discover new worlds in {title}. This exciting {category} game offers {features} and provides endless exploration opportunities. Start your adventure today!",
            "Begin your quest in {title}. This free online {category} game brings you {features} and captivating storylines. Open it in your browser and play.",
            "{title} offers rich adventures and discoveries. Experience {features} in this {category} game. Play instantly and explore new realms for free!",
            "Start your epic journey with {title}! This engaging {category} game features {features} and promises hours of adventure. Play free now!",
        ],
        &[
            "adventure games, {title}, exploration games, {category} adventure",
            "{title} game, quest games, free adventure, online exploration",
            "play {title}, adventure games online, free {category}, story games",
            "{title} online, adventure gaming, exploration, {category} quest",
        ],
        &[
            "Made for players who love exploration",
            "Ideal for story-driven gaming experiences",
            "Great for immersive gameplay sessions",
            "Excellent for discovering new worlds",
            "A natural fit for narrative adventure fans",
        ],
        &[
            "Features rich storylines and character development",
            "Offers vast worlds to explore and secrets to uncover",
            "Includes engaging quests and meaningful choices",
            "Provides beautiful environments and atmospheric music",
            "Delivers memorable characters and epic moments",
        ],
        &[
            "Explore vast landscapes and hidden locations",
            "Interact with interesting characters and make choices",
            "Solve mysteries and uncover ancient secrets",
            "Collect items and upgrade your equipment",
            "Follow compelling storylines and complete quests",
        ],
    )
}

fn strategy() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Play {title} - Free Strategy Game Online",
            "{title} - Tactical Strategy Challenge",
            "Free {title} Game - Plan, Build and Win",
            "{title} Online - Strategy in Your Browser",
            "Strategy Game {title} - Outsmart Rivals",
        ],
        &[
            "Lead your forces to victory in {title}! This deep {category} game offers {features} and rewards careful planning. Play free online and test your tactics.",
            "Plan every move in {title}. This free online {category} game brings you {features} and smart opponents. Start building your empire today!",
            "{title} puts your decision making to the test. Enjoy {features} in this {category} game and outthink every rival. Play instantly in your browser!",
            "Build, defend and expand in {title}. This engaging {category} game features {features} and plenty of replay value. Play free online now!",
            "Think ahead and win in {title}! This {category} game offers {features} and a steady stream of tactical puzzles. Begin your campaign for free.",
        ],
        &[
            "strategy games, {title}, free online games, {category} tactics",
            "{title} game, tactical games, free strategy, browser strategy",
            "play {title}, strategy games online, free {category}, war games",
            "{title} online, planning games, free games, {category} strategy",
        ],
        &[
            "Ideal for players who like to plan ahead",
            "Great for sharpening tactical thinking",
            "Excellent for long, thoughtful sessions",
            "A solid choice for fans of resource management",
            "Made for players who enjoy outsmarting opponents",
        ],
        &[
            "Features layered tactics and meaningful choices",
            "Offers multiple paths to victory",
            "Includes base building and unit upgrades",
            "Provides challenging opponents that adapt to you",
            "Delivers clear maps and responsive controls",
        ],
        &[
            "Gather resources and plan your expansion carefully",
            "Position your units to exploit enemy weaknesses",
            "Research upgrades that unlock new tactics",
            "Defend key locations while preparing a counterattack",
            "Balance economy and army to outlast your rivals",
        ],
    )
}

fn racing() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Play {title} - Free Racing Game Online",
            "{title} - High Speed Racing Game",
            "Free {title} Game - Race to the Finish",
            "{title} Online - Racing in Your Browser",
            "Racing Game {title} - Hit the Track Now",
        ],
        &[
            "Put the pedal down in {title}! This fast {category} game offers {features} and tight, responsive handling. Play free online and chase the best lap time.",
            "Race against the clock in {title}. This free online {category} game brings you {features} and tracks full of sharp turns. Start your engine today!",
            "{title} is all about speed and precision. Enjoy {features} in this {category} game and climb the leaderboard. Play instantly in your browser!",
            "Drift, boost and overtake in {title}. This exciting {category} game features {features} and plenty of tracks to master. Play free online now!",
            "Feel the rush in {title}! This {category} game offers {features} and quick races that fit any break. Play for free and beat your rivals.",
        ],
        &[
            "racing games, {title}, free online games, {category} games",
            "{title} game, car games, free racing, browser racing",
            "play {title}, racing games online, free {category}, driving games",
            "{title} online, speed games, free games, {category} tracks",
        ],
        &[
            "Great for fans of speed and competition",
            "Ideal for quick races between tasks",
            "Excellent for players chasing lap records",
            "A strong pick for car enthusiasts",
            "Made for players who love a close finish",
        ],
        &[
            "Features smooth handling and detailed tracks",
            "Offers upgrades and unlockable vehicles",
            "Includes time trials and head-to-head races",
            "Provides responsive controls on every device",
            "Delivers fast loading and quick restarts",
        ],
        &[
            "Take corners cleanly to keep your speed",
            "Use boosts at the right moment to overtake",
            "Upgrade your vehicle between races",
            "Learn each track to shave off seconds",
            "Avoid obstacles while holding the racing line",
        ],
    )
}

fn default_genre() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Play {title} - Free Online Game",
            "{title} - Play Free in Your Browser",
            "Free {title} Game - Instant Online Fun",
            "{title} Online - Free Browser Game",
            "{title} - Quick and Fun Online Game",
        ],
        &[
            "Enjoy {title}, a fun {category} game with {features}. Play free online in your browser with nothing to set up, and come back for a new challenge any time.",
            "Looking for a quick break? {title} is a {category} game that brings you {features}. Start playing for free online and see how far you can get today.",
            "{title} is a free online {category} game packed with {features}. It runs right in your browser, so you can jump in and play within seconds.",
            "Try {title} now! This {category} game offers {features} and simple controls that anyone can learn. Play free online and enjoy every round.",
            "Play {title} for free online. This {category} game combines {features} with a steady learning curve. Begin in your browser and play at your own pace.",
        ],
        &[
            "{title}, free online games, {category} games, browser games",
            "{title} game, free games, online games, {category}",
            "play {title}, free {category} games, browser games, instant play",
            "{title} online, free browser game, {category} games, casual games",
        ],
        &[
            "Great for quick gaming sessions",
            "Ideal for players of every skill level",
            "Excellent for a relaxing break",
            "A good pick when you want something new",
            "Easy to learn and hard to put down",
        ],
        &[
            "Features simple controls and clear goals",
            "Offers short rounds and steady progression",
            "Includes colorful visuals and upbeat sound",
            "Provides new challenges every time you play",
            "Delivers smooth play on desktop and mobile",
        ],
        &[
            "Learn the basics quickly and improve with every round",
            "Complete objectives to unlock new levels",
            "Aim for a higher score each time you play",
            "Discover new mechanics as the game progresses",
            "Play at your own pace with no time pressure",
        ],
    )
}

/// Built-in category page pools
pub fn category_set() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Free {category} Games - Play Online Now",
            "{category} Games Collection - Free Games",
            "Play {category} Games Online - Instant Play",
            "Top {category} Games - Free Browser Gaming",
            "{category} Game Collection - Play Free",
        ],
        &[
            "Discover the top {categoryLower} games online! Our collection features {gameCount} games that you can play for free. Nothing to set up, start playing instantly!",
            "Play top-rated {categoryLower} games in your browser. We offer {gameCount} carefully selected games with hours of entertainment. Every game is free to play!",
            "Explore our {categoryLower} games library with {gameCount} titles. From classic favorites to new releases, find your next game and start playing for free!",
            "Enjoy {categoryLower} gaming with our collection of {gameCount} games. All games are browser-based, free to play online and instantly accessible!",
            "Browse {gameCount} exciting {categoryLower} games and find your next favorite. Our curated collection offers something for every player. Play free online now!",
        ],
        &[
            "{categoryLower} games, free online games, browser games, {categoryLower} collection",
            "play {categoryLower} games, free {categoryLower}, online gaming, browser entertainment",
            "{categoryLower} games online, free games, instant play, web games",
            "top {categoryLower} games, free browser games, online {categoryLower}, game collection",
        ],
        &[
            "A great home for {categoryLower} game enthusiasts",
            "Ideal for discovering new {categoryLower} experiences",
            "Great for quick gaming sessions",
            "Excellent variety of {categoryLower} styles",
            "Suitable for all skill levels",
        ],
        &[
            "Features the most popular {categoryLower} games",
            "Offers both classic and modern {categoryLower} titles",
            "Includes games for beginners and experts",
            "Provides regular updates with new games",
            "Delivers high-quality {categoryLower} gaming experiences",
        ],
        &[
            "Choose from various {categoryLower} game styles and difficulties",
            "Experience different themes and gameplay mechanics",
            "Enjoy both single-player and competitive options",
            "Discover hidden gems and popular favorites",
            "Play at your own pace with no time restrictions",
        ],
    )
}

/// Built-in tag page pools
pub fn tag_set() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "{tag} Games - Play Free Online",
            "Free {tag} Games Online - Instant Play",
            "Play {tag} Games - Free Browser Fun",
            "{tag} Game Collection - Free Online",
        ],
        &[
            "Discover {gameCount} free {tagLower} games you can play online right now. Every {tagLower} game runs in your browser with nothing to set up. Start playing today!",
            "Play the best {tagLower} games online for free. Our collection has {gameCount} {tagLower} games picked for quick fun in any browser. Jump in and enjoy!",
            "Love {tagLower} themes? Browse {gameCount} free online games built around {tagLower} ideas, from quick rounds to longer challenges. Play instantly today.",
            "Find your next favorite among {gameCount} {tagLower} games. All of them are free, run online in your browser and start in seconds. Begin playing now!",
        ],
        &[
            "{tagLower} games, free online games, browser games, {tagLower} theme, instant play games",
            "play {tagLower} games, free {tagLower} games, online games, browser fun",
            "{tagLower} game collection, free games online, {tagLower}, web games",
        ],
        &[
            "Great for players who enjoy {tagLower} themes",
            "Ideal for finding games with a {tagLower} twist",
            "Excellent for quick sessions with a familiar theme",
        ],
        &[
            "Features games that share a {tagLower} theme",
            "Offers a wide mix of styles around {tagLower} ideas",
            "Includes classic and new {tagLower} games",
        ],
        &[
            "Pick any {tagLower} game and start playing at once",
            "Try several {tagLower} games to find your favorite",
            "Come back often as new {tagLower} games arrive",
        ],
    )
}

/// Built-in home page pools
pub fn home_set() -> TemplateSet {
    TemplateSet::from_static(
        &[
            "Free Online Games - Play Instantly | {siteName}",
            "{siteName} - Free Online Games in Your Browser",
            "Play Free Browser Games Online | {siteName}",
        ],
        &[
            "Play {gameCount} free online games instantly at {siteName}. Enjoy action, puzzle, adventure games and more in {categoryCount} categories. Start playing now!",
            "Discover {gameCount} free browser games across {categoryCount} categories. Action, puzzle and adventure games load in seconds with nothing to set up. Play now!",
        ],
        &[
            "free online games, browser games, instant play games, action games, puzzle games, adventure games, free gaming",
            "free games, online games, browser games, web games, casual games, instant play",
        ],
        &["Hand-picked games that offer the best experience today"],
        &["Explore our most popular game categories and find your favorite genre"],
        &["Check out the newest additions to our game collection"],
    )
}
